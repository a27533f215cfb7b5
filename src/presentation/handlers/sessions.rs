use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::services::SubmitOutcome;
use crate::domain::{ChatSession, Message, SessionId, SessionView};
use crate::infrastructure::observability::sanitize_user_text;
use crate::presentation::state::AppState;

use super::error::ErrorResponse;

#[derive(Serialize)]
pub struct SessionResponse {
    pub id: SessionId,
    pub view: SessionView,
    pub awaiting_response: bool,
    pub expanded: bool,
    pub messages: Vec<Message>,
    pub suggestions: Vec<&'static str>,
}

impl From<ChatSession> for SessionResponse {
    fn from(session: ChatSession) -> Self {
        Self {
            id: session.id,
            view: session.view(),
            awaiting_response: session.awaiting_response(),
            expanded: session.is_expanded(),
            suggestions: session.quick_suggestions(),
            messages: session.messages().to_vec(),
        }
    }
}

#[derive(Serialize)]
pub struct MessagesResponse {
    pub messages: Vec<Message>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitMessageRequest {
    pub text: String,
}

fn parse_session_id(raw: &str) -> Result<SessionId, Response> {
    raw.parse::<SessionId>()
        .map_err(|e| ErrorResponse::new(StatusCode::BAD_REQUEST, e, "invalid_request_error"))
}

fn session_response(status: StatusCode, session: ChatSession) -> Response {
    (status, Json(SessionResponse::from(session))).into_response()
}

pub async fn create_session_handler(State(state): State<AppState>) -> Response {
    match state.chat_service.create_session().await {
        Ok(session) => session_response(StatusCode::CREATED, session),
        Err(e) => e.into_response(),
    }
}

pub async fn get_session_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    let id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.chat_service.session(id).await {
        Ok(session) => session_response(StatusCode::OK, session),
        Err(e) => e.into_response(),
    }
}

pub async fn end_session_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    let id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.chat_service.end_session(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn list_messages_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    let id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.chat_service.messages(id).await {
        Ok(messages) => (StatusCode::OK, Json(MessagesResponse { messages })).into_response(),
        Err(e) => e.into_response(),
    }
}

/// Accepts a user message. Blank text is not an error: the session is left
/// as it was and `204 No Content` is returned.
#[tracing::instrument(skip(state, request))]
pub async fn submit_message_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
    Json(request): Json<SubmitMessageRequest>,
) -> Response {
    let id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    tracing::debug!(text = %sanitize_user_text(&request.text), "Submission received");

    match state.chat_service.submit(id, &request.text).await {
        Ok(SubmitOutcome::Accepted(message)) => (StatusCode::ACCEPTED, Json(message)).into_response(),
        Ok(SubmitOutcome::Ignored) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn start_chat_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    let id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.chat_service.start_chat(id).await {
        Ok(session) => session_response(StatusCode::OK, session),
        Err(e) => e.into_response(),
    }
}

pub async fn back_to_welcome_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    let id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.chat_service.back_to_welcome(id).await {
        Ok(session) => session_response(StatusCode::OK, session),
        Err(e) => e.into_response(),
    }
}

pub async fn toggle_expanded_handler(
    State(state): State<AppState>,
    Path(session_id): Path<String>,
) -> Response {
    let id = match parse_session_id(&session_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    match state.chat_service.toggle_expanded(id).await {
        Ok(session) => session_response(StatusCode::OK, session),
        Err(e) => e.into_response(),
    }
}
