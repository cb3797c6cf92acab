/// Domain objects of the image intake side: the candidate image and the
/// value objects the scan pipeline produces from it.
pub mod candidate_image;
pub mod display_image;
pub mod product;
pub mod validation;
pub mod video_frame;

pub use candidate_image::{CandidateImage, MAX_IMAGE_BYTES, SUPPORTED_MIME_TYPES};
pub use display_image::DisplayImage;
pub use product::ProductDescriptor;
pub use validation::ValidationReport;
pub use video_frame::{EncodedFrame, VideoFrame};
