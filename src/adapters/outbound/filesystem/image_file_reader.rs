use crate::ports::outbound::ImageReader;
use crate::recognition::domain::CandidateImage;
use crate::shared::error::ScanError;
use crate::shared::Result;
use async_trait::async_trait;
use std::fs;
use std::path::Path;

/// FileSystemImageReader adapter for candidate images living on disk
///
/// Implements the ImageReader port and additionally builds the
/// `CandidateImage` descriptor a file picker would hand over: MIME type
/// guessed from the extension and size taken from file metadata.
pub struct FileSystemImageReader;

impl FileSystemImageReader {
    pub fn new() -> Self {
        Self
    }

    /// Describes a file on disk as a candidate image
    ///
    /// # Errors
    /// Returns an error if the path is a symlink, not a regular file, or
    /// its metadata cannot be read. Format and size limits are NOT checked
    /// here; that is the validator's job.
    pub fn describe(&self, path: &Path) -> Result<CandidateImage> {
        let metadata =
            fs::symlink_metadata(path).map_err(|e| ScanError::InvalidImagePath {
                path: path.to_path_buf(),
                reason: format!("Failed to read file metadata: {}", e),
            })?;

        // Security check: reject symbolic links
        if metadata.is_symlink() {
            return Err(ScanError::InvalidImagePath {
                path: path.to_path_buf(),
                reason: "Security: image path is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
            }
            .into());
        }

        if !metadata.is_file() {
            return Err(ScanError::InvalidImagePath {
                path: path.to_path_buf(),
                reason: "Not a regular file".to_string(),
            }
            .into());
        }

        Ok(CandidateImage::new(
            path.to_path_buf(),
            CandidateImage::mime_for_extension(path),
            metadata.len(),
        ))
    }
}

impl Default for FileSystemImageReader {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ImageReader for FileSystemImageReader {
    async fn read_bytes(&self, image: &CandidateImage) -> Result<Vec<u8>> {
        tokio::fs::read(&image.path)
            .await
            .map_err(|e| {
                ScanError::UnreadableImage {
                    path: image.path.clone(),
                    details: e.to_string(),
                }
                .into()
            })
    }
}
