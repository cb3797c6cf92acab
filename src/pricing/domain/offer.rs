use crate::pricing::domain::Store;
use serde::Serialize;

/// Shipping label used when an offer ships for free.
pub const FREE_SHIPPING: &str = "Grátis";

/// The two delivery windows the simulation knows about.
pub const DELIVERY_FAST: &str = "1-2 dias";
pub const DELIVERY_STANDARD: &str = "3-5 dias";

/// One simulated retailer listing for a recognized product.
///
/// A pure value object: every search fabricates fresh instances and nothing
/// mutates them afterwards. Serialized camelCase to match the shape the UI
/// layer consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    pub id: String,
    pub title: String,
    /// Final price after any discount, rounded to cents
    pub price: f64,
    /// Pre-discount price; present exactly when a discount was applied
    pub old_price: Option<f64>,
    /// Integer discount percent in 0-100; 0 means no discount
    pub discount: u8,
    pub store: Store,
    /// One-decimal rating string in "3.0"-"5.0"
    pub rating: String,
    pub reviews: u32,
    /// Either "Grátis" or a formatted shipping cost ("R$ 12.34")
    pub shipping: String,
    pub delivery: String,
    pub image: String,
    pub url: String,
    pub featured: bool,
}

impl Offer {
    pub fn ships_free(&self) -> bool {
        self.shipping == FREE_SHIPPING
    }

    pub fn rating_value(&self) -> f64 {
        self.rating.parse().unwrap_or(0.0)
    }
}
