use crate::recognition::domain::{EncodedFrame, VideoFrame};
use crate::shared::Result;
use async_trait::async_trait;

/// FrameEncoder port for turning a raw video frame into image bytes
///
/// The capture path renders the current frame of a live video source into
/// an offscreen raster and encodes it for upload. The encoding backend is
/// behind this port so the domain stays free of codec details.
#[async_trait]
pub trait FrameEncoder: Send + Sync {
    /// Encodes the frame into a self-describing blob of image bytes
    ///
    /// # Errors
    /// Returns an error if the encoder backend fails. Dimension checks
    /// happen before this port is reached.
    async fn encode(&self, frame: &VideoFrame) -> Result<EncodedFrame>;
}
