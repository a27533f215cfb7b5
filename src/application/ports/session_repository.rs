use crate::domain::{ChatSession, SessionEvent, SessionId};
use async_trait::async_trait;

use super::RepositoryError;

/// Session state after an event, and whether the event took effect.
#[derive(Debug, Clone)]
pub struct AppliedEvent {
    pub session: ChatSession,
    pub changed: bool,
}

/// Storage for live chat sessions.
///
/// `apply` must be atomic per session: concurrent events on the same
/// session are applied one after another and none is lost.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn insert(&self, session: ChatSession) -> Result<(), RepositoryError>;

    async fn get(&self, id: SessionId) -> Result<Option<ChatSession>, RepositoryError>;

    /// Applies `event` and returns the session as it is afterwards.
    async fn apply(
        &self,
        id: SessionId,
        event: SessionEvent,
    ) -> Result<AppliedEvent, RepositoryError>;

    /// Returns whether a session was removed.
    async fn remove(&self, id: SessionId) -> Result<bool, RepositoryError>;
}
