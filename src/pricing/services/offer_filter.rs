use crate::pricing::domain::{FilterCriteria, Offer, SortKey, StoreSelection};

/// OfferFilter - Client-side filter and sort over an offer list
///
/// Pure and non-mutating: the input slice is left untouched and a fresh
/// list is returned. The store filter runs first; then at most one sort
/// key applies. All sorts are stable, so ties keep their relative order.
pub struct OfferFilter;

impl OfferFilter {
    pub fn apply(offers: &[Offer], criteria: &FilterCriteria) -> Vec<Offer> {
        let mut filtered: Vec<Offer> = match &criteria.store {
            StoreSelection::All => offers.to_vec(),
            StoreSelection::Only(id) => offers
                .iter()
                .filter(|offer| offer.store.id == id.as_str())
                .cloned()
                .collect(),
        };

        match criteria.sort {
            Some(SortKey::PriceAscending) => {
                filtered.sort_by(|a, b| a.price.total_cmp(&b.price));
            }
            Some(SortKey::PriceDescending) => {
                filtered.sort_by(|a, b| b.price.total_cmp(&a.price));
            }
            Some(SortKey::RatingDescending) => {
                filtered.sort_by(|a, b| b.rating_value().total_cmp(&a.rating_value()));
            }
            Some(SortKey::StoreName) => {
                filtered.sort_by(|a, b| a.store.name.cmp(b.store.name));
            }
            Some(SortKey::FreeShippingFirst) => {
                // Boolean partition: free shipping sorts before paid
                filtered.sort_by_key(|offer| !offer.ships_free());
            }
            None => {}
        }

        filtered
    }
}
