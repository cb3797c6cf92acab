/// Adapters module containing concrete port implementations.
pub mod outbound;
