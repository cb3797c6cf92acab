use crate::recognition::domain::{
    CandidateImage, ValidationReport, MAX_IMAGE_BYTES, SUPPORTED_MIME_TYPES,
};

/// ImageValidator - Checks a candidate image before it enters the pipeline
///
/// Pure and synchronous. Rejections are reported as `ValidationReport`
/// values, never as errors; the checks run in a fixed order (presence,
/// format, size) so a file that fails several of them gets the message of
/// the first.
pub struct ImageValidator;

impl ImageValidator {
    /// Validates presence, MIME type, and size of a candidate image
    pub fn validate(image: Option<&CandidateImage>) -> ValidationReport {
        let Some(image) = image else {
            return ValidationReport::missing_file();
        };

        if !SUPPORTED_MIME_TYPES.contains(&image.mime_type.as_str()) {
            return ValidationReport::unsupported_format();
        }

        if image.size_bytes > MAX_IMAGE_BYTES {
            return ValidationReport::oversized();
        }

        ValidationReport::valid()
    }
}
