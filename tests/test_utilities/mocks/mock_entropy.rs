use price_lens::prelude::*;
use std::sync::Mutex;

/// Mock EntropySource replaying a scripted sequence of unit draws
///
/// Once the script is exhausted, every further draw returns the fallback
/// value, so tests can pin the draws they care about and leave the rest
/// neutral.
pub struct MockEntropy {
    draws: Mutex<Vec<f64>>,
    fallback: f64,
}

impl MockEntropy {
    pub fn scripted(draws: &[f64], fallback: f64) -> Self {
        let mut reversed: Vec<f64> = draws.to_vec();
        reversed.reverse();
        Self {
            draws: Mutex::new(reversed),
            fallback,
        }
    }

    pub fn constant(value: f64) -> Self {
        Self::scripted(&[], value)
    }
}

impl EntropySource for MockEntropy {
    fn next_unit(&self) -> f64 {
        self.draws.lock().unwrap().pop().unwrap_or(self.fallback)
    }
}
