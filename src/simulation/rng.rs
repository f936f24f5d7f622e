//! Random number source for the simulation

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

/// Bounded integer generator handed to every factory
///
/// Holds an optional seeded RNG for reproducible runs; without a seed it
/// draws from the thread-local generator.
#[derive(Debug, Clone, Default)]
pub struct SimRng {
    rng: Option<StdRng>,
}

impl SimRng {
    pub fn new() -> Self {
        Self { rng: None }
    }

    /// Create a generator with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Some(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    /// Uniform integer in `[min, max)`. The range must not be empty.
    pub fn random_range(&mut self, min: i64, max: i64) -> i64 {
        match &mut self.rng {
            Some(rng) => rng.random_range(min..max),
            None => rand::rng().random_range(min..max),
        }
    }

    /// Uniform index in `[0, upper)`. `upper` must be positive.
    pub fn random_index(&mut self, upper: usize) -> usize {
        match &mut self.rng {
            Some(rng) => rng.random_range(0..upper),
            None => rand::rng().random_range(0..upper),
        }
    }

    /// Roll a percentage in `[0, 100)`
    pub fn roll_percent(&mut self) -> u32 {
        match &mut self.rng {
            Some(rng) => rng.random_range(0..100),
            None => rand::rng().random_range(0..100),
        }
    }
}
