//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical deals
//! - **Reseedable**: `reset(Some(seed))` restarts the stream
//!
//! ```
//! use the_mind::core::{DeckSource, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.draw(10).unwrap(), b.draw(10).unwrap());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::card::{Card, DeckSource, RANK_COUNT};
use super::error::MindError;

/// Deterministic RNG backing deck dealing and stochastic baseline policies.
///
/// Uses ChaCha8 for speed while maintaining high quality randomness.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Generate a float uniformly in `[0, 1)`.
    pub fn gen_unit(&mut self) -> f32 {
        self.inner.gen::<f32>()
    }
}

impl DeckSource for GameRng {
    fn draw(&mut self, count: usize) -> Result<Vec<Card>, MindError> {
        let pool = RANK_COUNT as usize;
        if count > pool {
            return Err(MindError::InvalidDeck {
                reason: format!("cannot draw {} distinct cards from {}", count, pool),
            });
        }

        Ok(rand::seq::index::sample(&mut self.inner, pool, count)
            .into_iter()
            .map(|rank| Card(rank as u8))
            .collect())
    }

    fn reseed(&mut self, seed: u64) {
        *self = Self::new(seed);
    }
}
