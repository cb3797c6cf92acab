use std::path::{Path, PathBuf};

/// MIME types accepted by the scanner, surfaced to callers.
pub const SUPPORTED_MIME_TYPES: [&str; 4] =
    ["image/jpeg", "image/jpg", "image/png", "image/webp"];

/// Maximum accepted image size in bytes (10 MiB), surfaced to callers.
pub const MAX_IMAGE_BYTES: u64 = 10 * 1024 * 1024;

/// A candidate image handed in by the caller (file picker or camera roll).
///
/// Carries only the metadata validation looks at plus the path the bytes
/// can be read from later. The payload itself stays on disk until the scan
/// pipeline asks for it.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateImage {
    /// Where the raw bytes live
    pub path: PathBuf,
    /// Original file name, the only seed product recognition uses
    pub file_name: String,
    /// Declared MIME type (e.g. "image/png")
    pub mime_type: String,
    /// Declared size in bytes
    pub size_bytes: u64,
}

impl CandidateImage {
    pub fn new(path: PathBuf, mime_type: String, size_bytes: u64) -> Self {
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            path,
            file_name,
            mime_type,
            size_bytes,
        }
    }

    /// Guesses the MIME type from a file extension the way a browser would
    /// label a picked file. Unknown extensions map to a generic binary type
    /// so validation can reject them with the unsupported-format message.
    pub fn mime_for_extension(path: &Path) -> String {
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "jpg" | "jpeg" => "image/jpeg".to_string(),
            "png" => "image/png".to_string(),
            "webp" => "image/webp".to_string(),
            _ => "application/octet-stream".to_string(),
        }
    }
}
