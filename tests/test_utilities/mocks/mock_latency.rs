use async_trait::async_trait;
use price_lens::prelude::*;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock LatencySimulator that returns immediately and records the
/// durations it was asked to wait
#[derive(Default, Clone)]
pub struct MockLatencySimulator {
    requested: Arc<Mutex<Vec<Duration>>>,
}

impl MockLatencySimulator {
    pub fn new() -> Self {
        Self {
            requested: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requested(&self) -> Vec<Duration> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl LatencySimulator for MockLatencySimulator {
    async fn simulate(&self, delay: Duration) {
        self.requested.lock().unwrap().push(delay);
    }
}
