use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use wedding_ease::application::ports::{AppliedEvent, RepositoryError, SessionRepository};
use wedding_ease::application::services::{
    ChatService, ChatServiceError, SessionPolicy, SubmitOutcome,
};
use wedding_ease::domain::{
    CANNED_REPLIES, ChatSession, GREETING, Message, Sender, SessionEvent, SessionId, SessionView,
};
use wedding_ease::infrastructure::persistence::InMemorySessionRepository;

use crate::helpers::{chat_service, instant_simulator, timed_simulator};

struct UnavailableSessionRepository;

#[async_trait::async_trait]
impl SessionRepository for UnavailableSessionRepository {
    async fn insert(&self, _session: ChatSession) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("down".to_string()))
    }

    async fn get(&self, _id: SessionId) -> Result<Option<ChatSession>, RepositoryError> {
        Err(RepositoryError::Unavailable("down".to_string()))
    }

    async fn apply(
        &self,
        _id: SessionId,
        _event: SessionEvent,
    ) -> Result<AppliedEvent, RepositoryError> {
        Err(RepositoryError::Unavailable("down".to_string()))
    }

    async fn remove(&self, _id: SessionId) -> Result<bool, RepositoryError> {
        Err(RepositoryError::Unavailable("down".to_string()))
    }
}

/// Lands one user submission right before the first event it forwards,
/// the way a concurrent request could after any earlier read.
struct InterleavingSessionRepository {
    inner: InMemorySessionRepository,
    interleaved: AtomicBool,
}

impl InterleavingSessionRepository {
    fn new() -> Self {
        Self {
            inner: InMemorySessionRepository::new(),
            interleaved: AtomicBool::new(false),
        }
    }

    async fn interleave_once(&self, id: SessionId) {
        if !self.interleaved.swap(true, Ordering::SeqCst) {
            self.inner
                .apply(id, SessionEvent::UserSubmitted(Message::user("sneaked in")))
                .await
                .unwrap();
        }
    }
}

#[async_trait::async_trait]
impl SessionRepository for InterleavingSessionRepository {
    async fn insert(&self, session: ChatSession) -> Result<(), RepositoryError> {
        self.inner.insert(session).await
    }

    async fn get(&self, id: SessionId) -> Result<Option<ChatSession>, RepositoryError> {
        self.inner.get(id).await
    }

    async fn apply(
        &self,
        id: SessionId,
        event: SessionEvent,
    ) -> Result<AppliedEvent, RepositoryError> {
        self.interleave_once(id).await;
        self.inner.apply(id, event).await
    }

    async fn remove(&self, id: SessionId) -> Result<bool, RepositoryError> {
        self.inner.remove(id).await
    }
}

const THINKING_MS: u64 = 1500;

#[tokio::test(start_paused = true)]
async fn given_question_when_submitted_then_user_message_first_and_reply_after_delay() {
    let service = chat_service(timed_simulator(1, THINKING_MS), SessionPolicy::default());
    let session = service.create_session().await.unwrap();

    let outcome = service
        .submit(session.id, "What venue should I pick?")
        .await
        .unwrap();

    assert!(matches!(outcome, SubmitOutcome::Accepted(ref m) if m.sender == Sender::User));
    let messages = service.messages(session.id).await.unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].text, "What venue should I pick?");
    assert_eq!(messages[0].sender, Sender::User);

    tokio::time::sleep(Duration::from_millis(2000)).await;

    let messages = service.messages(session.id).await.unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].sender, Sender::Assistant);
    assert!(CANNED_REPLIES.iter().any(|r| *r == messages[1].text));
}

#[tokio::test(start_paused = true)]
async fn given_pending_reply_when_delay_not_elapsed_then_reply_is_not_visible() {
    let service = chat_service(timed_simulator(0, THINKING_MS), SessionPolicy::default());
    let session = service.create_session().await.unwrap();

    service.submit(session.id, "Budget?").await.unwrap();
    tokio::time::sleep(Duration::from_millis(THINKING_MS - 100)).await;

    let snapshot = service.session(session.id).await.unwrap();
    assert_eq!(snapshot.messages().len(), 1);
    assert!(snapshot.awaiting_response());

    tokio::time::sleep(Duration::from_millis(200)).await;

    let snapshot = service.session(session.id).await.unwrap();
    assert_eq!(snapshot.messages().len(), 2);
    assert!(!snapshot.awaiting_response());
}

#[tokio::test]
async fn given_blank_text_when_submitted_then_conversation_is_unchanged() {
    let service = chat_service(instant_simulator(0), SessionPolicy::default());
    let session = service.create_session().await.unwrap();

    for blank in ["", "   ", "\n"] {
        let outcome = service.submit(session.id, blank).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Ignored);
    }
    tokio::task::yield_now().await;

    let snapshot = service.session(session.id).await.unwrap();
    assert!(snapshot.messages().is_empty());
    assert_eq!(snapshot.view(), SessionView::Welcome);
    assert!(!snapshot.awaiting_response());
}

#[tokio::test(start_paused = true)]
async fn given_two_quick_submissions_when_replies_resolve_then_users_precede_replies() {
    let service = chat_service(timed_simulator(2, THINKING_MS), SessionPolicy::default());
    let session = service.create_session().await.unwrap();

    service.submit(session.id, "first").await.unwrap();
    service.submit(session.id, "second").await.unwrap();

    tokio::time::sleep(Duration::from_millis(2000)).await;

    let messages = service.messages(session.id).await.unwrap();
    assert_eq!(messages.len(), 4);
    assert_eq!(messages[0].text, "first");
    assert_eq!(messages[1].text, "second");
    assert!(messages[2..].iter().all(|m| m.sender == Sender::Assistant));
}

#[tokio::test(start_paused = true)]
async fn given_existing_history_when_new_message_submitted_then_earlier_messages_keep_position() {
    let service = chat_service(timed_simulator(4, THINKING_MS), SessionPolicy::default());
    let session = service.create_session().await.unwrap();

    service.submit(session.id, "one").await.unwrap();
    tokio::time::sleep(Duration::from_millis(2000)).await;
    let before = service.messages(session.id).await.unwrap();

    service.submit(session.id, "two").await.unwrap();
    tokio::time::sleep(Duration::from_millis(2000)).await;
    let after = service.messages(session.id).await.unwrap();

    assert_eq!(&after[..before.len()], &before[..]);
    assert_eq!(after.len(), before.len() + 2);
}

#[tokio::test]
async fn given_unknown_session_when_submitting_then_returns_not_found() {
    let service = chat_service(instant_simulator(0), SessionPolicy::default());
    let missing = SessionId::new();

    let result = service.submit(missing, "hello").await;
    assert!(matches!(result, Err(ChatServiceError::SessionNotFound(id)) if id == missing));

    let result = service.submit(missing, "  ").await;
    assert!(matches!(result, Err(ChatServiceError::SessionNotFound(_))));
}

#[tokio::test(start_paused = true)]
async fn given_ended_session_when_reply_arrives_then_reply_is_dropped() {
    let service = chat_service(timed_simulator(0, THINKING_MS), SessionPolicy::default());
    let session = service.create_session().await.unwrap();

    service.submit(session.id, "Are you there?").await.unwrap();
    service.end_session(session.id).await.unwrap();
    tokio::time::sleep(Duration::from_millis(2000)).await;

    let result = service.session(session.id).await;
    assert!(matches!(result, Err(ChatServiceError::SessionNotFound(_))));
}

#[tokio::test]
async fn given_greeting_policy_when_starting_chat_then_greeting_is_first_message() {
    let service = chat_service(instant_simulator(0), SessionPolicy::default());
    let session = service.create_session().await.unwrap();

    let started = service.start_chat(session.id).await.unwrap();

    assert_eq!(started.view(), SessionView::Chatting);
    assert_eq!(started.messages().len(), 1);
    assert_eq!(started.messages()[0].text, GREETING);
}

#[tokio::test]
async fn given_history_when_going_back_then_history_survives() {
    let service = chat_service(instant_simulator(0), SessionPolicy::default());
    let session = service.create_session().await.unwrap();
    service.start_chat(session.id).await.unwrap();

    let back = service.back_to_welcome(session.id).await.unwrap();

    assert_eq!(back.view(), SessionView::Welcome);
    assert_eq!(back.messages().len(), 1);
}

#[tokio::test]
async fn given_locked_policy_and_history_when_going_back_then_returns_conflict() {
    let policy = SessionPolicy {
        greeting_on_start: true,
        allow_back_with_history: false,
    };
    let service = chat_service(instant_simulator(0), policy);
    let session = service.create_session().await.unwrap();

    let empty_back = service.back_to_welcome(session.id).await.unwrap();
    assert_eq!(empty_back.view(), SessionView::Welcome);

    service.start_chat(session.id).await.unwrap();
    let result = service.back_to_welcome(session.id).await;

    assert!(matches!(result, Err(ChatServiceError::BackNavigationLocked(_))));
    let snapshot = service.session(session.id).await.unwrap();
    assert_eq!(snapshot.view(), SessionView::Chatting);
}

#[tokio::test]
async fn given_session_when_toggling_expanded_then_flag_flips() {
    let service = chat_service(instant_simulator(0), SessionPolicy::default());
    let session = service.create_session().await.unwrap();

    let toggled = service.toggle_expanded(session.id).await.unwrap();

    assert!(toggled.is_expanded());
}

#[tokio::test]
async fn given_unknown_session_when_ending_then_returns_not_found() {
    let service = chat_service(instant_simulator(0), SessionPolicy::default());

    let result = service.end_session(SessionId::new()).await;

    assert!(matches!(result, Err(ChatServiceError::SessionNotFound(_))));
}

#[tokio::test]
async fn given_unavailable_store_when_creating_session_then_returns_repository_error() {
    let service = ChatService::new(
        Arc::new(UnavailableSessionRepository),
        instant_simulator(0),
        SessionPolicy::default(),
    );

    let result = service.create_session().await;

    assert!(matches!(
        result,
        Err(ChatServiceError::Repository(RepositoryError::Unavailable(_)))
    ));
}

#[tokio::test]
async fn given_locked_policy_when_submission_lands_during_back_then_back_is_refused() {
    let policy = SessionPolicy {
        greeting_on_start: false,
        allow_back_with_history: false,
    };
    let repository = Arc::new(InterleavingSessionRepository::new());
    let session = ChatSession::new();
    let id = session.id;
    repository.inner.insert(session).await.unwrap();
    repository
        .inner
        .apply(id, SessionEvent::ChatStarted { greet: false })
        .await
        .unwrap();
    let service = ChatService::new(repository.clone(), instant_simulator(0), policy);

    let result = service.back_to_welcome(id).await;

    assert!(matches!(result, Err(ChatServiceError::BackNavigationLocked(_))));
    let snapshot = repository.inner.get(id).await.unwrap().unwrap();
    assert_eq!(snapshot.view(), SessionView::Chatting);
    assert_eq!(snapshot.messages().len(), 1);
}
