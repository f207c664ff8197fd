//! Mixed strategies over the pure strategies of the game.

use serde::{Deserialize, Serialize};

use super::payoff::STRATEGY_COUNT;
use crate::core::{Error, Result};

/// Slack accepted by [`MixedStrategy::new`] for normalization and sign.
pub const PROBABILITY_TOLERANCE: f64 = 1e-6;

/// A probability distribution over the pure strategies.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MixedStrategy {
    probabilities: [f64; STRATEGY_COUNT],
}

impl MixedStrategy {
    /// Create a validated strategy.
    ///
    /// Entries may be negative or miss the unit sum by at most
    /// [`PROBABILITY_TOLERANCE`].
    pub fn new(probabilities: [f64; STRATEGY_COUNT]) -> Result<Self> {
        let strategy = Self { probabilities };
        strategy.validate(PROBABILITY_TOLERANCE)?;
        Ok(strategy)
    }

    /// Wrap solver output without validation.
    ///
    /// LP solutions carry round-off; call [`validate`](Self::validate) with
    /// the solver's tolerance before trusting them.
    #[must_use]
    pub const fn from_raw(probabilities: [f64; STRATEGY_COUNT]) -> Self {
        Self { probabilities }
    }

    /// The uniform distribution.
    #[must_use]
    pub fn uniform() -> Self {
        Self {
            probabilities: [1.0 / STRATEGY_COUNT as f64; STRATEGY_COUNT],
        }
    }

    /// All mass on one pure strategy.
    ///
    /// # Panics
    ///
    /// Panics if `index >= STRATEGY_COUNT`.
    #[must_use]
    pub fn pure(index: usize) -> Self {
        assert!(index < STRATEGY_COUNT, "pure strategy index out of range");
        let mut probabilities = [0.0; STRATEGY_COUNT];
        probabilities[index] = 1.0;
        Self { probabilities }
    }

    #[must_use]
    pub fn probabilities(&self) -> &[f64; STRATEGY_COUNT] {
        &self.probabilities
    }

    /// Total probability mass.
    #[must_use]
    pub fn sum(&self) -> f64 {
        self.probabilities.iter().sum()
    }

    /// Check non-negativity and normalization within `tolerance`.
    pub fn validate(&self, tolerance: f64) -> Result<()> {
        if let Some((index, &value)) = self
            .probabilities
            .iter()
            .enumerate()
            .find(|(_, p)| **p < -tolerance || !p.is_finite())
        {
            return Err(Error::NegativeProbability { index, value });
        }

        let sum = self.sum();
        if (sum - 1.0).abs() > tolerance {
            return Err(Error::NotNormalized { sum });
        }

        Ok(())
    }
}

impl std::ops::Index<usize> for MixedStrategy {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.probabilities[index]
    }
}
