/// Concrete implementations of the outbound ports.
pub mod console;
pub mod encoding;
pub mod entropy;
pub mod filesystem;
pub mod formatters;
pub mod timing;
