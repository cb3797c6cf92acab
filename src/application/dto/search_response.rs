use crate::pricing::domain::Offer;
use serde::Serialize;

/// PriceSearchResponse - Internal response DTO from the price search use case
///
/// The offer list arrives sorted ascending by price; consumers re-sort via
/// `OfferFilter` as needed.
#[derive(Debug, Clone, Serialize)]
pub struct PriceSearchResponse {
    pub offers: Vec<Offer>,
}

impl PriceSearchResponse {
    pub fn new(offers: Vec<Offer>) -> Self {
        Self { offers }
    }
}
