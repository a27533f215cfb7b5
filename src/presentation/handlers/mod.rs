mod error;
mod health;
mod sessions;
mod suggestions;

pub use error::{ApiError, ErrorResponse};
pub use health::health_handler;
pub use sessions::{
    MessagesResponse, SessionResponse, SubmitMessageRequest, back_to_welcome_handler,
    create_session_handler, end_session_handler, get_session_handler, list_messages_handler,
    start_chat_handler, submit_message_handler, toggle_expanded_handler,
};
pub use suggestions::suggestions_handler;
