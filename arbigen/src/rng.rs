//! RNG backend integration.
//!
//! Generation itself only sees `&mut dyn rand::RngCore`; this module is the
//! thin provider layer that constructs the concrete engine, seeded or not,
//! so test runs stay reproducible.

use rand::SeedableRng;
use rand::rngs::StdRng;

/// Trait for providing random number generators.
pub trait RngProvider: Send + Sync {
    /// The type of RNG this provider creates.
    type Rng: rand::RngCore + Clone + Send;

    /// Create a new RNG instance with an optional seed.
    fn create_rng(&self, seed: Option<u64>) -> Self::Rng;
}

/// Default provider backed by `StdRng`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultRngProvider;

impl RngProvider for DefaultRngProvider {
    type Rng = StdRng;

    fn create_rng(&self, seed: Option<u64>) -> Self::Rng {
        match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Create an entropy-seeded RNG from the default provider.
pub fn create_rng() -> StdRng {
    DefaultRngProvider.create_rng(None)
}

/// Create an RNG with a specific seed for reproducible generation.
pub fn create_seeded_rng(seed: u64) -> StdRng {
    DefaultRngProvider.create_rng(Some(seed))
}
