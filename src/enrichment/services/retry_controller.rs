use crate::enrichment::policies::RetryPolicy;
use crate::ports::outbound::Delay;
use std::future::Future;
use tracing::{debug, warn};

/// Outcome of a single fetch-and-extract attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttemptOutcome<T> {
    Success(T),
    /// The source has nothing for this identifier; not retried
    NotFound,
    /// The attempt failed and may succeed later
    TransientFailure,
}

/// Final outcome after all attempts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryResult<T> {
    Success(T),
    NotFound,
    /// Every attempt failed transiently
    Exhausted,
}

/// Drives attempts with linear backoff
///
/// After the k-th failed attempt the controller pauses `k * base_pause`.
/// At most `max_retries + 1` attempts are made and no pause follows the
/// last one.
pub struct RetryController<'a, D: Delay> {
    policy: &'a RetryPolicy,
    delay: &'a D,
}

impl<'a, D: Delay> RetryController<'a, D> {
    pub fn new(policy: &'a RetryPolicy, delay: &'a D) -> Self {
        Self { policy, delay }
    }

    /// Runs `attempt` until it succeeds, reports `NotFound`, or the policy
    /// runs out of retries. `label` only appears in log output.
    pub async fn run<T, F, Fut>(&self, label: &str, mut attempt: F) -> RetryResult<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = AttemptOutcome<T>>,
    {
        let max_attempts = self.policy.max_attempts();

        for number in 1..=max_attempts {
            match attempt().await {
                AttemptOutcome::Success(value) => return RetryResult::Success(value),
                AttemptOutcome::NotFound => return RetryResult::NotFound,
                AttemptOutcome::TransientFailure if number < max_attempts => {
                    let pause = self.policy.pause_for(number);
                    debug!(
                        label,
                        attempt = number,
                        pause_secs = pause.as_secs_f64(),
                        "attempt failed, backing off"
                    );
                    self.delay.pause(pause).await;
                }
                AttemptOutcome::TransientFailure => {}
            }
        }

        warn!(label, attempts = max_attempts, "giving up after repeated failures");
        RetryResult::Exhausted
    }
}
