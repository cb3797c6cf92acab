use crate::ports::outbound::FrameEncoder;
use crate::recognition::domain::{EncodedFrame, VideoFrame};
use crate::shared::{Result, ScanError};

/// CaptureFrameUseCase - Encodes a still photo from a live video frame
///
/// The camera path of image intake: the UI hands over the current frame
/// of its video source and receives an uploadable blob back. A source
/// that has not produced a real frame yet (zero width or height) is
/// rejected instead of yielding a degenerate blob.
///
/// # Type Parameters
/// * `FE` - FrameEncoder implementation
pub struct CaptureFrameUseCase<FE> {
    frame_encoder: FE,
}

impl<FE> CaptureFrameUseCase<FE>
where
    FE: FrameEncoder,
{
    pub fn new(frame_encoder: FE) -> Self {
        Self { frame_encoder }
    }

    /// Encodes the given frame into an uploadable still
    ///
    /// # Errors
    /// Returns `ScanError::EmptyFrame` for a zero-dimension frame, or the
    /// encoder's error if encoding fails.
    pub async fn execute(&self, frame: &VideoFrame) -> Result<EncodedFrame> {
        if frame.is_empty() {
            return Err(ScanError::EmptyFrame {
                width: frame.width(),
                height: frame.height(),
            }
            .into());
        }

        self.frame_encoder.encode(frame).await
    }
}
