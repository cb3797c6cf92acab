/// Timer adapter for the simulated latencies.
pub mod tokio_latency;

pub use tokio_latency::TokioLatencySimulator;
