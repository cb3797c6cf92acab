use async_trait::async_trait;
use price_lens::prelude::*;

/// Mock ImageReader serving bytes from memory, or failing on demand
pub struct MockImageReader {
    bytes: Vec<u8>,
    should_fail: bool,
}

impl MockImageReader {
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            bytes: Vec::new(),
            should_fail: true,
        }
    }
}

#[async_trait]
impl ImageReader for MockImageReader {
    async fn read_bytes(&self, _image: &CandidateImage) -> Result<Vec<u8>> {
        if self.should_fail {
            anyhow::bail!("Mock image read failure");
        }
        Ok(self.bytes.clone())
    }
}
