use axum::Json;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::domain::QUICK_SUGGESTIONS;

#[derive(Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<&'static str>,
}

pub async fn suggestions_handler() -> impl IntoResponse {
    Json(SuggestionsResponse {
        suggestions: QUICK_SUGGESTIONS.to_vec(),
    })
}
