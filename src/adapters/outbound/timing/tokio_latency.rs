use crate::ports::outbound::LatencySimulator;
use async_trait::async_trait;
use std::time::Duration;

/// TokioLatencySimulator adapter backing the artificial delays with the
/// runtime's timer
pub struct TokioLatencySimulator;

impl TokioLatencySimulator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TokioLatencySimulator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LatencySimulator for TokioLatencySimulator {
    async fn simulate(&self, delay: Duration) {
        tokio::time::sleep(delay).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_simulate_waits_at_least_the_requested_time() {
        let simulator = TokioLatencySimulator::new();
        let start = Instant::now();
        simulator.simulate(Duration::from_millis(20)).await;
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
