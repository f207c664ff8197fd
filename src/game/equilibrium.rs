//! Maximin equilibria and their verification.

use serde::{Deserialize, Serialize};

use super::payoff::{PayoffMatrix, STRATEGY_COUNT};
use super::strategy::MixedStrategy;
use crate::core::{Error, Result};

/// A maximin strategy together with the value it claims to guarantee.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Equilibrium {
    /// Row player's mixed strategy.
    pub strategy: MixedStrategy,
    /// Game value reported by the solve.
    pub value: f64,
}

impl Equilibrium {
    #[must_use]
    pub fn new(strategy: MixedStrategy, value: f64) -> Self {
        Self { strategy, value }
    }

    /// Row payoff of the strategy against each pure column response.
    #[must_use]
    pub fn column_payoffs(&self, matrix: &PayoffMatrix) -> [f64; STRATEGY_COUNT] {
        matrix.column_payoffs(&self.strategy)
    }

    /// Payoff against the column player's best response.
    #[must_use]
    pub fn worst_case_payoff(&self, matrix: &PayoffMatrix) -> f64 {
        self.column_payoffs(matrix)
            .into_iter()
            .fold(f64::INFINITY, f64::min)
    }

    /// How far the claimed value exceeds what the strategy actually secures.
    ///
    /// Zero (up to round-off) for a correct maximin solution.
    #[must_use]
    pub fn guarantee_gap(&self, matrix: &PayoffMatrix) -> f64 {
        (self.value - self.worst_case_payoff(matrix)).max(0.0)
    }

    /// Check the maximin invariants within `tolerance`:
    /// a valid distribution, and every column paying at least `value`.
    pub fn verify(&self, matrix: &PayoffMatrix, tolerance: f64) -> Result<()> {
        self.strategy.validate(tolerance)?;

        for (column, payoff) in self.column_payoffs(matrix).into_iter().enumerate() {
            if payoff < self.value - tolerance {
                return Err(Error::MaximinViolated {
                    column,
                    payoff,
                    value: self.value,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::PAYOFFS;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_equalizer_verifies() {
        let strategy = PAYOFFS.equalizing_strategy().unwrap();
        let eq = Equilibrium::new(strategy, 0.0);

        assert!(eq.verify(&PAYOFFS, 1e-9).is_ok());
        assert_abs_diff_eq!(eq.worst_case_payoff(&PAYOFFS), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(eq.guarantee_gap(&PAYOFFS), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_uniform_is_exploitable() {
        let eq = Equilibrium::new(MixedStrategy::uniform(), 0.0);

        // Column 0 pays (-1 + 0.39) / 3 against uniform play.
        let worst = eq.worst_case_payoff(&PAYOFFS);
        assert_abs_diff_eq!(worst, -0.61 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(eq.guarantee_gap(&PAYOFFS), 0.61 / 3.0, epsilon = 1e-12);

        match eq.verify(&PAYOFFS, 1e-6) {
            Err(Error::MaximinViolated { column, .. }) => assert_eq!(column, 0),
            other => panic!("expected maximin violation, got {:?}", other),
        }
    }

    #[test]
    fn test_overclaimed_value() {
        let strategy = PAYOFFS.equalizing_strategy().unwrap();
        let eq = Equilibrium::new(strategy, 0.1);
        assert!(eq.verify(&PAYOFFS, 1e-6).is_err());
        assert_abs_diff_eq!(eq.guarantee_gap(&PAYOFFS), 0.1, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_strategy_rejected_first() {
        let eq = Equilibrium::new(MixedStrategy::from_raw([0.5, 0.5, 0.5]), -10.0);
        assert!(matches!(
            eq.verify(&PAYOFFS, 1e-6),
            Err(Error::NotNormalized { .. })
        ));
    }

    #[test]
    fn test_serialization() {
        let eq = Equilibrium::new(MixedStrategy::pure(1), -1.0);
        let json = serde_json::to_string(&eq).unwrap();
        let deserialized: Equilibrium = serde_json::from_str(&json).unwrap();
        assert_eq!(eq, deserialized);
    }
}
