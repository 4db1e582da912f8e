mod retry_policy;

pub use retry_policy::{RetryPolicy, DEFAULT_BASE_PAUSE_SECS, DEFAULT_RETRY_COUNT};
