use async_trait::async_trait;
use std::time::Duration;

/// Delay port used for backoff and courtesy pauses
///
/// Injected so tests can record pauses instead of waiting for them.
#[async_trait]
pub trait Delay: Send + Sync {
    /// Suspends the current crawl for `duration`
    async fn pause(&self, duration: Duration);
}
