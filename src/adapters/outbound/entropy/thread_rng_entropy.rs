use crate::ports::outbound::EntropySource;
use rand::Rng;

/// ThreadRngEntropy adapter drawing from the thread-local OS-seeded RNG
///
/// Stateless: each draw grabs the calling thread's generator, so the
/// adapter stays `Send + Sync` and concurrent operations never contend.
pub struct ThreadRngEntropy;

impl ThreadRngEntropy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ThreadRngEntropy {
    fn default() -> Self {
        Self::new()
    }
}

impl EntropySource for ThreadRngEntropy {
    fn next_unit(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}
