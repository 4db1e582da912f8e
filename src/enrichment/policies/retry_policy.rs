use std::time::Duration;

/// Retries granted after the first failed attempt
pub const DEFAULT_RETRY_COUNT: u32 = 4;

/// Unit of the linear backoff, in seconds
pub const DEFAULT_BASE_PAUSE_SECS: u64 = 15;

/// RetryPolicy encoding the backoff rules for flaky sources
///
/// The n-th retry waits `n × base_pause`: a linear backoff, so with the
/// defaults a persistently failing request is tried five times over
/// 15 + 30 + 45 + 60 seconds before it is given up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    max_retries: u32,
    base_pause: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, base_pause: Duration) -> Self {
        Self {
            max_retries,
            base_pause,
        }
    }

    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }

    /// Upper bound of attempts for one request
    pub fn max_attempts(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Pause taken after the `attempt`-th failure (1-based)
    pub fn pause_for(&self, attempt: u32) -> Duration {
        self.base_pause.saturating_mul(attempt)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_RETRY_COUNT, Duration::from_secs(DEFAULT_BASE_PAUSE_SECS))
    }
}
