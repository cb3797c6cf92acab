/// Domain objects of the price search side: the store catalog, offers, and
/// filter settings.
pub mod filter;
pub mod offer;
pub mod store;

pub use filter::{FilterCriteria, SortKey, StoreSelection};
pub use offer::{Offer, DELIVERY_FAST, DELIVERY_STANDARD, FREE_SHIPPING};
pub use store::{store_by_id, Store, STORE_CATALOG};
