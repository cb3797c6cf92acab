use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow scripts to distinguish between different
/// types of failures and successes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the image was accepted and the pipeline completed
    Success = 0,
    /// The candidate image was rejected by validation
    ImageRejected = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (unreadable file, write error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ImageRejected => write!(f, "Image Rejected (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the scan pipeline.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// reducing boilerplate while maintaining user-friendly error messages.
///
/// Validation outcomes are NOT errors: `ImageValidator` reports them as
/// plain `ValidationReport` values. The variants here cover the failure
/// paths that reject an async operation.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to read image: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    UnreadableImage { path: PathBuf, details: String },

    #[error("Invalid image path: {path}\nReason: {reason}\n\n💡 Hint: Please point the scanner at a regular image file")]
    InvalidImagePath { path: PathBuf, reason: String },

    #[error("Cannot capture from an empty video frame ({width}x{height})\n\n💡 Hint: Wait for the camera stream to deliver its first frame before capturing")]
    EmptyFrame { width: u32, height: u32 },

    #[error("Frame buffer length mismatch: expected {expected} bytes for {width}x{height} RGBA, got {actual}")]
    FrameBufferMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },

    #[error("Failed to encode captured frame: {details}")]
    EncodeFailure { details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },
}
