/// Timing adapters for backoff and courtesy pauses
mod tokio_delay;

pub use tokio_delay::TokioDelay;
