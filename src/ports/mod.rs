/// Ports module defining interfaces for hexagonal architecture
///
/// Only outbound (driven) ports exist here: the use cases themselves are
/// the crate's public API, so no separate inbound interfaces are defined.
pub mod outbound;
