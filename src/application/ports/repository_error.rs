use crate::domain::SessionId;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("session not found: {0}")]
    NotFound(SessionId),
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}
