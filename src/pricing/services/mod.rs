/// Domain services of the price search side.
pub mod offer_filter;
pub mod offer_generator;

pub use offer_filter::OfferFilter;
pub use offer_generator::OfferGenerator;
