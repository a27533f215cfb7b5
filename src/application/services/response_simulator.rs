use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{Delay, RandomSource};
use crate::domain::{CANNED_REPLIES, Message};

/// Window the simulated thinking time is drawn from: `[min_ms, max_ms)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayWindow {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl DelayWindow {
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    /// A window that resolves immediately.
    pub fn zero() -> Self {
        Self::new(0, 0)
    }

    fn pick(&self, random: &dyn RandomSource) -> Duration {
        let millis = if self.max_ms > self.min_ms {
            random.next_millis(self.min_ms..self.max_ms)
        } else {
            self.min_ms
        };
        Duration::from_millis(millis)
    }
}

impl Default for DelayWindow {
    fn default() -> Self {
        Self::new(1000, 2000)
    }
}

/// Stand-in assistant that answers with a canned reply after a random delay.
pub struct ResponseSimulator {
    random: Arc<dyn RandomSource>,
    delay: Arc<dyn Delay>,
    window: DelayWindow,
}

impl ResponseSimulator {
    pub fn new(random: Arc<dyn RandomSource>, delay: Arc<dyn Delay>, window: DelayWindow) -> Self {
        Self {
            random,
            delay,
            window,
        }
    }

    /// Produces an assistant reply. The user's text does not influence the
    /// choice of reply.
    #[tracing::instrument(skip_all)]
    pub async fn respond_to(&self, _user_text: &str) -> Message {
        let thinking_time = self.window.pick(self.random.as_ref());
        self.delay.wait(thinking_time).await;

        let index = self.random.next_index(CANNED_REPLIES.len()) % CANNED_REPLIES.len();
        tracing::debug!(
            reply_index = index,
            thinking_ms = thinking_time.as_millis() as u64,
            "Simulated reply ready"
        );

        Message::assistant(CANNED_REPLIES[index])
    }
}
