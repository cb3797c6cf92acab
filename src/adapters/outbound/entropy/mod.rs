/// Randomness adapter.
pub mod thread_rng_entropy;

pub use thread_rng_entropy::ThreadRngEntropy;
