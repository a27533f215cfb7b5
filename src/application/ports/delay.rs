use std::time::Duration;

use async_trait::async_trait;

/// Suspends the caller for a period of "thinking time".
#[async_trait]
pub trait Delay: Send + Sync {
    async fn wait(&self, duration: Duration);
}
