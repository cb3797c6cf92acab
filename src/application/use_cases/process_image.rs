use crate::application::dto::{ScanRequest, ScanResponse};
use crate::ports::outbound::{EntropySource, ImageReader, LatencySimulator, ProgressReporter};
use crate::recognition::domain::DisplayImage;
use crate::recognition::services::ProductRecognizer;
use crate::shared::Result;
use std::time::Duration;

/// Artificial "AI analysis" latency (milliseconds)
const PROCESS_DELAY_MS: u64 = 1500;

/// ProcessImageUseCase - Core use case for the image scan pipeline
///
/// Simulates the upload-and-recognize round trip: one injected delay, an
/// asynchronous read of the image bytes for the displayable conversion,
/// and a fabricated recognition result seeded by the file name alone.
///
/// # Type Parameters
/// * `IR` - ImageReader implementation
/// * `ES` - EntropySource implementation
/// * `LS` - LatencySimulator implementation
/// * `PR` - ProgressReporter implementation
pub struct ProcessImageUseCase<IR, ES, LS, PR> {
    image_reader: IR,
    entropy: ES,
    latency: LS,
    progress_reporter: PR,
}

impl<IR, ES, LS, PR> ProcessImageUseCase<IR, ES, LS, PR>
where
    IR: ImageReader,
    ES: EntropySource,
    LS: LatencySimulator,
    PR: ProgressReporter,
{
    /// Creates a new ProcessImageUseCase with injected dependencies
    pub fn new(image_reader: IR, entropy: ES, latency: LS, progress_reporter: PR) -> Self {
        Self {
            image_reader,
            entropy,
            latency,
            progress_reporter,
        }
    }

    /// Executes the scan pipeline for a validated candidate image
    ///
    /// # Arguments
    /// * `request` - Scan request carrying the candidate image
    ///
    /// # Returns
    /// ScanResponse with the displayable data URI and the fabricated
    /// product descriptor
    ///
    /// # Errors
    /// Returns an error only if the underlying byte read fails; the
    /// operation never resolves with partial data.
    pub async fn execute(&self, request: ScanRequest) -> Result<ScanResponse> {
        self.progress_reporter
            .report(&format!("📷 Scanning: {}", request.image.file_name));
        self.progress_reporter
            .begin_wait("🔎 Analyzing image with the recognition model...");

        // Stand-in for the round trip a real recognition backend would take
        self.latency
            .simulate(Duration::from_millis(PROCESS_DELAY_MS))
            .await;

        let bytes = match self.image_reader.read_bytes(&request.image).await {
            Ok(bytes) => bytes,
            Err(e) => {
                self.progress_reporter
                    .report_error("❌ Failed to read the selected image");
                return Err(e);
            }
        };
        let display = DisplayImage::from_bytes(&request.image.mime_type, &bytes);

        let recognizer = ProductRecognizer::new(&self.entropy);
        let product = recognizer.recognize(&request.image.file_name);

        self.progress_reporter
            .finish_wait(&format!("✅ Product identified: {}", product.name));

        Ok(ScanResponse::new(display, product))
    }
}
