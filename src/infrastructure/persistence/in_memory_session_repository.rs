use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::application::ports::{AppliedEvent, RepositoryError, SessionRepository};
use crate::domain::{ChatSession, SessionEvent, SessionId};

/// Process-local session store. Sessions vanish when the process exits.
#[derive(Debug, Default)]
pub struct InMemorySessionRepository {
    sessions: RwLock<HashMap<SessionId, ChatSession>>,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned<T>(_: T) -> RepositoryError {
    RepositoryError::Unavailable("session lock poisoned".to_string())
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn insert(&self, session: ChatSession) -> Result<(), RepositoryError> {
        let mut sessions = self.sessions.write().map_err(poisoned)?;
        sessions.insert(session.id, session);
        Ok(())
    }

    async fn get(&self, id: SessionId) -> Result<Option<ChatSession>, RepositoryError> {
        let sessions = self.sessions.read().map_err(poisoned)?;
        Ok(sessions.get(&id).cloned())
    }

    async fn apply(
        &self,
        id: SessionId,
        event: SessionEvent,
    ) -> Result<AppliedEvent, RepositoryError> {
        let mut sessions = self.sessions.write().map_err(poisoned)?;
        let session = sessions.get_mut(&id).ok_or(RepositoryError::NotFound(id))?;
        let changed = session.apply(event);
        Ok(AppliedEvent {
            session: session.clone(),
            changed,
        })
    }

    async fn remove(&self, id: SessionId) -> Result<bool, RepositoryError> {
        let mut sessions = self.sessions.write().map_err(poisoned)?;
        Ok(sessions.remove(&id).is_some())
    }
}
