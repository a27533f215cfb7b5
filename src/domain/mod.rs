mod canned_replies;
mod chat_session;
mod conversation;
mod message;
mod message_id;
mod sender;
mod session_id;
mod session_view;

pub use canned_replies::{CANNED_REPLIES, GREETING, QUICK_SUGGESTIONS};
pub use chat_session::{ChatSession, SessionEvent};
pub use conversation::Conversation;
pub use message::Message;
pub use message_id::MessageId;
pub use sender::Sender;
pub use session_id::SessionId;
pub use session_view::SessionView;
