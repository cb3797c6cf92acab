use crate::shared::{Result, ScanError};

/// One raw RGBA frame pulled from a live video source.
///
/// The UI layer owns the camera; it hands the current frame over as a plain
/// pixel buffer with known dimensions. Construction validates that the
/// buffer actually holds `width * height` RGBA pixels, so downstream code
/// never sees a malformed frame.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoFrame {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl VideoFrame {
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 4;
        if rgba.len() != expected {
            return Err(ScanError::FrameBufferMismatch {
                width,
                height,
                expected,
                actual: rgba.len(),
            }
            .into());
        }
        Ok(Self {
            width,
            height,
            rgba,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// True when either dimension is zero, i.e. the source has not
    /// delivered a real frame yet.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// An encoded still captured from a video frame, ready for upload.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedFrame {
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl EncodedFrame {
    pub fn new(mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            mime_type: mime_type.into(),
            bytes,
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
