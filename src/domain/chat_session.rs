use chrono::{DateTime, Utc};

use super::{Conversation, GREETING, Message, QUICK_SUGGESTIONS, SessionId, SessionView};

/// State change applied to a [`ChatSession`].
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// A user message was submitted; a reply is now pending.
    UserSubmitted(Message),
    /// A simulated reply resolved.
    ReplyArrived(Message),
    /// Explicit start action. Seeds the greeting when `greet` is set and the
    /// conversation is still empty.
    ChatStarted { greet: bool },
    /// Back action. Refused when the conversation has history and
    /// `allow_with_history` is not set.
    ReturnedToWelcome { allow_with_history: bool },
    ExpandedToggled,
}

/// One visitor's conversation together with its view state.
#[derive(Debug, Clone)]
pub struct ChatSession {
    pub id: SessionId,
    pub created_at: DateTime<Utc>,
    conversation: Conversation,
    view: SessionView,
    pending_replies: usize,
    expanded: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            id: SessionId::new(),
            created_at: Utc::now(),
            conversation: Conversation::new(),
            view: SessionView::Welcome,
            pending_replies: 0,
            expanded: false,
        }
    }

    /// Applies `event` and reports whether anything changed.
    pub fn apply(&mut self, event: SessionEvent) -> bool {
        match event {
            SessionEvent::UserSubmitted(message) => {
                if !self.conversation.append_message(message) {
                    return false;
                }
                self.view = SessionView::Chatting;
                self.pending_replies += 1;
                true
            }
            SessionEvent::ReplyArrived(message) => {
                self.pending_replies = self.pending_replies.saturating_sub(1);
                self.conversation.append_message(message)
            }
            SessionEvent::ChatStarted { greet } => {
                if greet && self.conversation.is_empty() {
                    self.conversation.append_message(Message::assistant(GREETING));
                }
                self.view = SessionView::Chatting;
                true
            }
            SessionEvent::ReturnedToWelcome { allow_with_history } => {
                if !allow_with_history && !self.conversation.is_empty() {
                    return false;
                }
                self.view = SessionView::Welcome;
                true
            }
            SessionEvent::ExpandedToggled => {
                self.expanded = !self.expanded;
                true
            }
        }
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn messages(&self) -> &[Message] {
        self.conversation.current_messages()
    }

    pub fn view(&self) -> SessionView {
        self.view
    }

    pub fn awaiting_response(&self) -> bool {
        self.pending_replies > 0
    }

    pub fn pending_replies(&self) -> usize {
        self.pending_replies
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Quick suggestions are only offered until the user has spoken.
    pub fn quick_suggestions(&self) -> Vec<&'static str> {
        if self.conversation.has_user_messages() {
            Vec::new()
        } else {
            QUICK_SUGGESTIONS.to_vec()
        }
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
