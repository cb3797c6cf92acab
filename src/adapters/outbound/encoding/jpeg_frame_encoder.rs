use crate::ports::outbound::FrameEncoder;
use crate::recognition::domain::{EncodedFrame, VideoFrame};
use crate::shared::error::ScanError;
use crate::shared::Result;
use async_trait::async_trait;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbaImage};

/// JPEG quality used for captured stills (out of 100).
const JPEG_QUALITY: u8 = 80;

/// JpegFrameEncoder adapter rendering a raw RGBA frame into a JPEG blob
///
/// JPEG has no alpha channel, so the frame is flattened to RGB before
/// encoding.
pub struct JpegFrameEncoder {
    quality: u8,
}

impl JpegFrameEncoder {
    pub fn new() -> Self {
        Self {
            quality: JPEG_QUALITY,
        }
    }
}

impl Default for JpegFrameEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FrameEncoder for JpegFrameEncoder {
    async fn encode(&self, frame: &VideoFrame) -> Result<EncodedFrame> {
        let raster = RgbaImage::from_raw(frame.width(), frame.height(), frame.rgba().to_vec())
            .ok_or_else(|| ScanError::EncodeFailure {
                details: "RGBA buffer does not match frame dimensions".to_string(),
            })?;
        let rgb = DynamicImage::ImageRgba8(raster).to_rgb8();

        let mut bytes = Vec::new();
        let mut encoder = JpegEncoder::new_with_quality(&mut bytes, self.quality);
        encoder
            .encode_image(&rgb)
            .map_err(|e| ScanError::EncodeFailure {
                details: e.to_string(),
            })?;

        Ok(EncodedFrame::new("image/jpeg", bytes))
    }
}
