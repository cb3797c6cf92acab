use async_trait::async_trait;
use std::time::Duration;

/// LatencySimulator port for the artificial processing delays
///
/// Every async operation in the pipeline suspends at exactly one injected
/// delay that stands in for real network or processing latency. Routing the
/// delay through this port lets tests replace it with an instant no-op while
/// still asserting the requested durations.
#[async_trait]
pub trait LatencySimulator: Send + Sync {
    /// Suspends the current operation for the given duration.
    async fn simulate(&self, delay: Duration);
}
