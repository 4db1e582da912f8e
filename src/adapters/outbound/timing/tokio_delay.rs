use crate::ports::outbound::Delay;
use async_trait::async_trait;
use std::time::Duration;

/// Delay adapter suspending on the Tokio timer
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn pause(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
