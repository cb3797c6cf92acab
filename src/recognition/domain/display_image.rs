use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Serialize;

/// Displayable embedded-data representation of an image.
///
/// Wraps a `data:{mime};base64,{payload}` URI so the caller can render the
/// picked image without touching the file system again.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DisplayImage {
    data_uri: String,
}

impl DisplayImage {
    /// Embeds raw image bytes as a base64 data URI.
    pub fn from_bytes(mime_type: &str, bytes: &[u8]) -> Self {
        let payload = STANDARD.encode(bytes);
        Self {
            data_uri: format!("data:{};base64,{}", mime_type, payload),
        }
    }

    pub fn as_data_uri(&self) -> &str {
        &self.data_uri
    }
}
