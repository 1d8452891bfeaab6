//! Random initial fills ("soups").
//!
//! Uses a seeded ChaCha8 RNG so that a `(rows, cols, density, seed)`
//! quadruple always yields the same pattern on every platform.

use life_core::Position;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::PatternError;
use crate::loader::PatternLoader;
use crate::pattern::Pattern;

/// Fills a `rows x cols` rectangle, each cell alive with probability `density`.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomSoupLoader {
    rows: u32,
    cols: u32,
    density: f64,
    seed: u64,
}

impl RandomSoupLoader {
    /// A soup generator. `density` is checked when loading.
    pub fn new(rows: u32, cols: u32, density: f64, seed: u64) -> Self {
        Self {
            rows,
            cols,
            density,
            seed,
        }
    }

    /// The RNG seed.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform sample in `[0, 1)` from the top 53 bits of a `u64`.
    fn unit(rng: &mut ChaCha8Rng) -> f64 {
        (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

impl PatternLoader for RandomSoupLoader {
    fn load(&self) -> Result<Pattern, PatternError> {
        if !(0.0..=1.0).contains(&self.density) {
            return Err(PatternError::InvalidDensity {
                value: self.density,
            });
        }
        let rows = i32::try_from(self.rows).map_err(|_| PatternError::TooLarge {
            row: self.rows as usize,
            col: 0,
        })?;
        let cols = i32::try_from(self.cols).map_err(|_| PatternError::TooLarge {
            row: 0,
            col: self.cols as usize,
        })?;

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut cells = Vec::new();
        for row in 0..rows {
            for col in 0..cols {
                if Self::unit(&mut rng) < self.density {
                    cells.push(Position::new(row, col));
                }
            }
        }
        log::debug!(
            "random soup {}x{} at density {} (seed {}): {} alive",
            self.cols,
            self.rows,
            self.density,
            self.seed,
            cells.len()
        );
        Ok(Pattern::new(cells))
    }
}
