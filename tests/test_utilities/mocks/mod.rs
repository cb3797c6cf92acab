/// Mock implementations for testing
mod mock_entropy;
mod mock_image_reader;
mod mock_latency;
mod mock_progress_reporter;

pub use mock_entropy::MockEntropy;
pub use mock_image_reader::MockImageReader;
pub use mock_latency::MockLatencySimulator;
pub use mock_progress_reporter::MockProgressReporter;
