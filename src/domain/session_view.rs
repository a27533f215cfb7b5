use std::fmt;

use serde::Serialize;

/// Which screen a session is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionView {
    Welcome,
    Chatting,
}

impl SessionView {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionView::Welcome => "welcome",
            SessionView::Chatting => "chatting",
        }
    }
}

impl fmt::Display for SessionView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
