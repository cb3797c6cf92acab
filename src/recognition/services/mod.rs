/// Domain services of the image intake side.
pub mod image_validator;
pub mod product_recognizer;

pub use image_validator::ImageValidator;
pub use product_recognizer::ProductRecognizer;
