use crate::recognition::domain::CandidateImage;
use crate::shared::Result;
use async_trait::async_trait;

/// ImageReader port for loading a candidate image's bytes
///
/// This port abstracts the asynchronous read of the raw image payload that
/// backs the displayable conversion. Product recognition never looks at the
/// bytes; they exist only to build the embedded-data representation shown to
/// the caller.
#[async_trait]
pub trait ImageReader: Send + Sync {
    /// Reads the raw bytes of the candidate image
    ///
    /// # Errors
    /// Returns an error if the underlying source cannot be read. A failed
    /// read rejects the enclosing scan operation; it must never resolve
    /// with partial data.
    async fn read_bytes(&self, image: &CandidateImage) -> Result<Vec<u8>>;
}
