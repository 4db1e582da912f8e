use async_trait::async_trait;
use cve_crawl::prelude::*;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Delay that records requested pauses instead of waiting
#[derive(Default, Clone)]
pub struct RecordingDelay {
    pauses: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingDelay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pauses(&self) -> Vec<Duration> {
        self.pauses.lock().unwrap().clone()
    }

    /// Recorded pauses in whole seconds
    pub fn pause_secs(&self) -> Vec<u64> {
        self.pauses().iter().map(Duration::as_secs).collect()
    }
}

#[async_trait]
impl Delay for RecordingDelay {
    async fn pause(&self, duration: Duration) {
        self.pauses.lock().unwrap().push(duration);
    }
}
