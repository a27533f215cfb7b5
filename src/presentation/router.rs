use axum::Router;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    back_to_welcome_handler, create_session_handler, end_session_handler, get_session_handler,
    health_handler, list_messages_handler, start_chat_handler, submit_message_handler,
    suggestions_handler, toggle_expanded_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health_handler))
        .route("/api/v1/suggestions", get(suggestions_handler))
        .route("/api/v1/sessions", post(create_session_handler))
        .route(
            "/api/v1/sessions/{session_id}",
            get(get_session_handler).delete(end_session_handler),
        )
        .route(
            "/api/v1/sessions/{session_id}/messages",
            get(list_messages_handler).post(submit_message_handler),
        )
        .route(
            "/api/v1/sessions/{session_id}/start",
            post(start_chat_handler),
        )
        .route(
            "/api/v1/sessions/{session_id}/back",
            post(back_to_welcome_handler),
        )
        .route(
            "/api/v1/sessions/{session_id}/expanded",
            post(toggle_expanded_handler),
        )
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
