use crate::ports::outbound::OfferFormatter;
use crate::pricing::domain::Offer;
use crate::recognition::domain::ProductDescriptor;
use crate::shared::Result;
use serde_json::json;

/// JsonOfferFormatter adapter rendering results as pretty-printed JSON
///
/// The shape mirrors what the UI layer consumes: the recognized product
/// followed by the offer list, camelCase keys throughout.
pub struct JsonOfferFormatter;

impl JsonOfferFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonOfferFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl OfferFormatter for JsonOfferFormatter {
    fn format(&self, product: &ProductDescriptor, offers: &[Offer]) -> Result<String> {
        let document = json!({
            "product": product,
            "offers": offers,
        });
        let mut output = serde_json::to_string_pretty(&document)?;
        output.push('\n');
        Ok(output)
    }
}
