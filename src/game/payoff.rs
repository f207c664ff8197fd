//! The payoff matrix of the game.

use serde::{Deserialize, Serialize};

use super::strategy::MixedStrategy;

/// Number of pure strategies available to each player.
pub const STRATEGY_COUNT: usize = 3;

/// The shipped game: a skewed rock-paper-scissors cycle.
///
/// Strategy 0 beats 1, 1 beats 2, and 2 beats 0, but the 2-over-0 win only
/// pays 0.39 instead of 1.
pub const PAYOFFS: PayoffMatrix = PayoffMatrix::new([
    [0.0, 1.0, -0.39],
    [-1.0, 0.0, 1.0],
    [0.39, -1.0, 0.0],
]);

/// Row player's payoffs in a zero-sum game.
///
/// `entries[i][j]` is what the row player wins playing `i` against column
/// strategy `j`; the column player loses the same amount.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PayoffMatrix {
    entries: [[f64; STRATEGY_COUNT]; STRATEGY_COUNT],
}

impl PayoffMatrix {
    /// Create a matrix from row-major entries.
    #[must_use]
    pub const fn new(entries: [[f64; STRATEGY_COUNT]; STRATEGY_COUNT]) -> Self {
        Self { entries }
    }

    /// Payoff to the row player for a pure strategy pair.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.entries[row][col]
    }

    /// Check `M[i][j] == -M[j][i]` within `tolerance`.
    ///
    /// Antisymmetric games are symmetric zero-sum games: both players share
    /// the same optimal strategy and the value is 0.
    #[must_use]
    pub fn is_antisymmetric(&self, tolerance: f64) -> bool {
        (0..STRATEGY_COUNT).all(|i| {
            (0..STRATEGY_COUNT).all(|j| (self.entries[i][j] + self.entries[j][i]).abs() <= tolerance)
        })
    }

    /// Expected row payoff when the row player mixes with `row` and the
    /// column player with `col`.
    #[must_use]
    pub fn expected_payoff(&self, row: &MixedStrategy, col: &MixedStrategy) -> f64 {
        self.column_payoffs(row)
            .iter()
            .zip(col.probabilities())
            .map(|(payoff, q)| payoff * q)
            .sum()
    }

    /// Row payoff of `strategy` against each pure column strategy.
    ///
    /// Entry `j` is `sum_i pi[i] * M[i][j]`.
    #[must_use]
    pub fn column_payoffs(&self, strategy: &MixedStrategy) -> [f64; STRATEGY_COUNT] {
        let mut payoffs = [0.0; STRATEGY_COUNT];
        for (j, payoff) in payoffs.iter_mut().enumerate() {
            *payoff = strategy
                .probabilities()
                .iter()
                .enumerate()
                .map(|(i, p)| p * self.entries[i][j])
                .sum();
        }
        payoffs
    }

    /// Closed-form equalizing strategy of an antisymmetric matrix.
    ///
    /// For `M = [[0, a, b], [-a, 0, c], [-b, -c, 0]]` the kernel of `M` is
    /// spanned by `(c, -b, a)`. When that vector can be scaled into a
    /// probability distribution, every column pays exactly 0 against it and
    /// it is an optimal strategy. Returns `None` for matrices that are not
    /// antisymmetric or whose kernel direction changes sign.
    #[must_use]
    pub fn equalizing_strategy(&self) -> Option<MixedStrategy> {
        if !self.is_antisymmetric(1e-12) {
            return None;
        }

        let a = self.entries[0][1];
        let b = self.entries[0][2];
        let c = self.entries[1][2];
        let kernel = [c, -b, a];

        let sum: f64 = kernel.iter().sum();
        if sum.abs() < f64::EPSILON {
            return None;
        }

        MixedStrategy::new(kernel.map(|x| x / sum)).ok()
    }
}

impl Default for PayoffMatrix {
    fn default() -> Self {
        PAYOFFS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_shipped_matrix_is_antisymmetric() {
        assert!(PAYOFFS.is_antisymmetric(0.0));
        assert_eq!(PAYOFFS.get(2, 0), 0.39);
        assert_eq!(PAYOFFS.get(0, 2), -0.39);
    }

    #[test]
    fn test_not_antisymmetric() {
        let matrix = PayoffMatrix::new([[1.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 0.0]]);
        assert!(!matrix.is_antisymmetric(1e-9));
        assert!(matrix.equalizing_strategy().is_none());
    }

    #[test]
    fn test_column_payoffs_pure() {
        let payoffs = PAYOFFS.column_payoffs(&MixedStrategy::pure(1));
        assert_eq!(payoffs, [-1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_expected_payoff_uniform() {
        let uniform = MixedStrategy::uniform();
        // Antisymmetric: any strategy against itself pays 0.
        assert_abs_diff_eq!(PAYOFFS.expected_payoff(&uniform, &uniform), 0.0, epsilon = 1e-12);

        let rock = MixedStrategy::pure(0);
        let paper = MixedStrategy::pure(2);
        assert_abs_diff_eq!(PAYOFFS.expected_payoff(&paper, &rock), 0.39, epsilon = 1e-12);
    }

    #[test]
    fn test_equalizing_strategy() {
        let pi = PAYOFFS.equalizing_strategy().unwrap();
        assert_abs_diff_eq!(pi[0], 1.0 / 2.39, epsilon = 1e-12);
        assert_abs_diff_eq!(pi[1], 0.39 / 2.39, epsilon = 1e-12);
        assert_abs_diff_eq!(pi[2], 1.0 / 2.39, epsilon = 1e-12);

        for payoff in PAYOFFS.column_payoffs(&pi) {
            assert_abs_diff_eq!(payoff, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_equalizing_strategy_classic_rps() {
        let rps = PayoffMatrix::new([[0.0, 1.0, -1.0], [-1.0, 0.0, 1.0], [1.0, -1.0, 0.0]]);
        let pi = rps.equalizing_strategy().unwrap();
        for p in pi.probabilities() {
            assert_abs_diff_eq!(*p, 1.0 / 3.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_equalizing_strategy_dominated() {
        // Strategy 0 beats both others; its kernel direction has mixed signs.
        let matrix = PayoffMatrix::new([[0.0, 1.0, 1.0], [-1.0, 0.0, 1.0], [-1.0, -1.0, 0.0]]);
        assert!(matrix.equalizing_strategy().is_none());
    }
}
