use crate::pricing::domain::Offer;
use crate::recognition::domain::ProductDescriptor;
use crate::shared::Result;

/// OfferFormatter port for formatting search results
///
/// This port abstracts the formatting logic for the different output
/// surfaces (JSON, terminal table).
pub trait OfferFormatter {
    /// Formats the recognized product and its offers
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, product: &ProductDescriptor, offers: &[Offer]) -> Result<String>;
}
