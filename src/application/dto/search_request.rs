use crate::recognition::domain::ProductDescriptor;

/// PriceSearchRequest - Internal request DTO for the price search use case
#[derive(Debug, Clone)]
pub struct PriceSearchRequest {
    /// The recognized product to search offers for
    pub product: ProductDescriptor,
}

impl PriceSearchRequest {
    pub fn new(product: ProductDescriptor) -> Self {
        Self { product }
    }
}
