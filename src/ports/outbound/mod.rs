/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with the outside world (randomness, timers, file system,
/// codecs, console).
pub mod entropy_source;
pub mod frame_encoder;
pub mod image_reader;
pub mod latency_simulator;
pub mod offer_formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use entropy_source::EntropySource;
pub use frame_encoder::FrameEncoder;
pub use image_reader::ImageReader;
pub use latency_simulator::LatencySimulator;
pub use offer_formatter::OfferFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
