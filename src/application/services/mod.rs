mod chat_service;
mod response_simulator;

pub use chat_service::{ChatService, ChatServiceError, SessionPolicy, SubmitOutcome};
pub use response_simulator::{DelayWindow, ResponseSimulator};
