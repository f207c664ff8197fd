//! Error types for maximin-lp.

use thiserror::Error;

/// Result type for maximin-lp operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building programs or checking strategies.
///
/// Solver outcomes (infeasible, unbounded, ...) are not errors; they are
/// reported through [`SolveStatus`](crate::lp::SolveStatus).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// A constraint row or objective has the wrong number of coefficients.
    #[error("dimension mismatch: expected {expected} coefficients, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// A strategy assigns negative mass to a pure strategy.
    #[error("negative probability {value} at strategy {index}")]
    NegativeProbability { index: usize, value: f64 },

    /// A strategy does not sum to one.
    #[error("probabilities sum to {sum}, expected 1")]
    NotNormalized { sum: f64 },

    /// A column response earns less than the claimed game value.
    #[error("column {column} pays {payoff}, below game value {value}")]
    MaximinViolated { column: usize, payoff: f64, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::DimensionMismatch { expected: 4, found: 3 };
        assert_eq!(
            err.to_string(),
            "dimension mismatch: expected 4 coefficients, found 3"
        );

        let err = Error::NotNormalized { sum: 0.5 };
        assert_eq!(err.to_string(), "probabilities sum to 0.5, expected 1");
    }
}
