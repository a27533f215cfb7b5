mod init_tracing;
mod request_id;
mod tracing_config;
mod user_text_sanitizer;

pub use init_tracing::init_tracing;
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
pub use tracing_config::TracingConfig;
pub use user_text_sanitizer::sanitize_user_text;
