use crate::*;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

/// Simulation-wide random source.
///
/// Clones share one generator, so seeding the dice handed to every composite
/// and stochastic behavior reproduces the whole sequence of draws.
#[derive(Debug, Clone)]
pub struct Dice(Arc<Mutex<SmallRng>>);

impl Dice {
    pub fn seeded(seed: u64) -> Self {
        Self(Arc::new(Mutex::new(SmallRng::seed_from_u64(seed))))
    }
    /// Uniform index in `0..n`. `n` must be positive.
    pub fn index(&self, n: usize) -> usize {
        debug_assert!(n > 0);
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .random_range(0..n)
    }
    /// True with probability `p`, clamped to `[0, 1]`.
    pub fn chance(&self, p: Probability) -> bool {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .random_bool(p.clamp(0., 1.))
    }
}

impl Default for Dice {
    fn default() -> Self {
        Self(Arc::new(Mutex::new(SmallRng::from_rng(&mut rand::rng()))))
    }
}
