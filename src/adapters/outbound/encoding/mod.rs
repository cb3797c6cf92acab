/// Codec adapters for the capture path.
pub mod jpeg_frame_encoder;

pub use jpeg_frame_encoder::JpegFrameEncoder;
