/// Price search: randomized offer generation over the fixed store catalog
/// and client-side filtering.
pub mod domain;
pub mod services;
