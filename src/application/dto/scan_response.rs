use crate::recognition::domain::{DisplayImage, ProductDescriptor};
use serde::Serialize;

/// ScanResponse - Internal response DTO from the image scan use case
///
/// Pairs the displayable embedded image with the fabricated recognition
/// result; serialized camelCase for the consuming UI layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResponse {
    /// Base64 data URI the caller can render directly
    pub image_url: DisplayImage,
    /// The fabricated recognition result
    pub product_data: ProductDescriptor,
}

impl ScanResponse {
    pub fn new(image_url: DisplayImage, product_data: ProductDescriptor) -> Self {
        Self {
            image_url,
            product_data,
        }
    }
}
