use std::sync::Arc;

use crate::application::ports::{RepositoryError, SessionRepository};
use crate::domain::{ChatSession, Message, SessionEvent, SessionId};

use super::ResponseSimulator;

/// Behavior switches for the session screen flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionPolicy {
    pub greeting_on_start: bool,
    pub allow_back_with_history: bool,
}

impl Default for SessionPolicy {
    fn default() -> Self {
        Self {
            greeting_on_start: true,
            allow_back_with_history: true,
        }
    }
}

/// Result of a submission.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The message was appended and a reply is on its way.
    Accepted(Message),
    /// Blank input; nothing changed.
    Ignored,
}

/// Drives chat sessions: stores user input and schedules simulated replies.
pub struct ChatService {
    sessions: Arc<dyn SessionRepository>,
    simulator: Arc<ResponseSimulator>,
    policy: SessionPolicy,
}

impl ChatService {
    pub fn new(
        sessions: Arc<dyn SessionRepository>,
        simulator: Arc<ResponseSimulator>,
        policy: SessionPolicy,
    ) -> Self {
        Self {
            sessions,
            simulator,
            policy,
        }
    }

    pub async fn create_session(&self) -> Result<ChatSession, ChatServiceError> {
        let session = ChatSession::new();
        self.sessions.insert(session.clone()).await?;
        tracing::info!(session_id = %session.id, "Session created");
        Ok(session)
    }

    pub async fn session(&self, id: SessionId) -> Result<ChatSession, ChatServiceError> {
        self.sessions
            .get(id)
            .await?
            .ok_or(ChatServiceError::SessionNotFound(id))
    }

    pub async fn messages(&self, id: SessionId) -> Result<Vec<Message>, ChatServiceError> {
        Ok(self.session(id).await?.messages().to_vec())
    }

    /// Appends `text` as a user message and schedules the assistant reply.
    ///
    /// The reply is produced on a spawned task and lands in the session
    /// whenever its delay elapses, independently of later submissions.
    #[tracing::instrument(skip(self, text), fields(session_id = %id))]
    pub async fn submit(&self, id: SessionId, text: &str) -> Result<SubmitOutcome, ChatServiceError> {
        if text.trim().is_empty() {
            // Unknown sessions are still reported as such.
            self.session(id).await?;
            tracing::debug!("Ignoring blank submission");
            return Ok(SubmitOutcome::Ignored);
        }

        let message = Message::user(text);
        self.sessions
            .apply(id, SessionEvent::UserSubmitted(message.clone()))
            .await?;

        let sessions = Arc::clone(&self.sessions);
        let simulator = Arc::clone(&self.simulator);
        let user_text = text.to_string();
        tokio::spawn(async move {
            let reply = simulator.respond_to(&user_text).await;
            match sessions.apply(id, SessionEvent::ReplyArrived(reply)).await {
                Ok(_) => tracing::debug!(session_id = %id, "Reply appended"),
                Err(RepositoryError::NotFound(_)) => {
                    tracing::debug!(session_id = %id, "Session ended before reply arrived")
                }
                Err(e) => tracing::error!(session_id = %id, error = %e, "Failed to append reply"),
            }
        });

        Ok(SubmitOutcome::Accepted(message))
    }

    pub async fn start_chat(&self, id: SessionId) -> Result<ChatSession, ChatServiceError> {
        let greet = self.policy.greeting_on_start;
        Ok(self
            .sessions
            .apply(id, SessionEvent::ChatStarted { greet })
            .await?
            .session)
    }

    pub async fn back_to_welcome(&self, id: SessionId) -> Result<ChatSession, ChatServiceError> {
        let event = SessionEvent::ReturnedToWelcome {
            allow_with_history: self.policy.allow_back_with_history,
        };
        let applied = self.sessions.apply(id, event).await?;
        if !applied.changed {
            return Err(ChatServiceError::BackNavigationLocked(id));
        }
        Ok(applied.session)
    }

    pub async fn toggle_expanded(&self, id: SessionId) -> Result<ChatSession, ChatServiceError> {
        Ok(self
            .sessions
            .apply(id, SessionEvent::ExpandedToggled)
            .await?
            .session)
    }

    pub async fn end_session(&self, id: SessionId) -> Result<(), ChatServiceError> {
        if self.sessions.remove(id).await? {
            tracing::info!(session_id = %id, "Session ended");
            Ok(())
        } else {
            Err(ChatServiceError::SessionNotFound(id))
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ChatServiceError {
    #[error("session not found: {0}")]
    SessionNotFound(SessionId),
    #[error("cannot leave a conversation with history: {0}")]
    BackNavigationLocked(SessionId),
    #[error("repository: {0}")]
    Repository(RepositoryError),
}

impl From<RepositoryError> for ChatServiceError {
    fn from(e: RepositoryError) -> Self {
        match e {
            RepositoryError::NotFound(id) => ChatServiceError::SessionNotFound(id),
            other => ChatServiceError::Repository(other),
        }
    }
}
