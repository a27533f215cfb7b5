use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::ChatServiceError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ApiError,
}

#[derive(Serialize)]
pub struct ApiError {
    pub message: String,
    pub r#type: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>, kind: &str) -> Response {
        (
            status,
            Json(ErrorResponse {
                error: ApiError {
                    message: message.into(),
                    r#type: kind.to_string(),
                },
            }),
        )
            .into_response()
    }
}

impl IntoResponse for ChatServiceError {
    fn into_response(self) -> Response {
        match &self {
            ChatServiceError::SessionNotFound(_) => {
                ErrorResponse::new(StatusCode::NOT_FOUND, self.to_string(), "not_found")
            }
            ChatServiceError::BackNavigationLocked(_) => {
                ErrorResponse::new(StatusCode::CONFLICT, self.to_string(), "conflict")
            }
            ChatServiceError::Repository(e) => {
                tracing::error!(error = %e, "Session store failure");
                ErrorResponse::new(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Session store unavailable",
                    "api_error",
                )
            }
        }
    }
}
