/// Use cases orchestrating the scan and search pipelines with generic
/// dependency injection.
pub mod capture_frame;
pub mod process_image;
pub mod search_prices;

pub use capture_frame::CaptureFrameUseCase;
pub use process_image::ProcessImageUseCase;
pub use search_prices::SearchPricesUseCase;
