use super::{Message, Sender};

/// Append-only, chronologically ordered message log of one session.
#[derive(Debug, Clone, Default)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `message` at the end of the log.
    ///
    /// User messages with blank text are dropped and `false` is returned;
    /// the log is left untouched in that case.
    pub fn append_message(&mut self, message: Message) -> bool {
        if message.sender == Sender::User && message.is_blank() {
            return false;
        }
        self.messages.push(message);
        true
    }

    pub fn current_messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn has_user_messages(&self) -> bool {
        self.messages.iter().any(|m| m.sender == Sender::User)
    }
}
