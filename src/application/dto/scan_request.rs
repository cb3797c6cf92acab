use crate::recognition::domain::CandidateImage;

/// ScanRequest - Internal request DTO for the image scan use case
///
/// Callers are expected to have run `ImageValidator::validate` on the image
/// before building a request; the pipeline itself no longer rejects inputs
/// the validator accepts.
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// The validated candidate image
    pub image: CandidateImage,
}

impl ScanRequest {
    pub fn new(image: CandidateImage) -> Self {
        Self { image }
    }
}
