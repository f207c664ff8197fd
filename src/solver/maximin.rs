//! Solve the maximin program and read back the equilibrium.

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::core::{Error, Result, SolverConfig};
use crate::game::{Equilibrium, MixedStrategy, PayoffMatrix, STRATEGY_COUNT};
use crate::lp::{ConicBackend, LpBackend, SolveStatus};

use super::formulation::{maximin_program, VALUE_INDEX, VARIABLE_COUNT};

/// Outcome of an equilibrium solve.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    pub status: SolveStatus,
    /// Present only when `status` is optimal.
    pub equilibrium: Option<Equilibrium>,
}

impl Solution {
    /// The equilibrium strategy, if the solve succeeded.
    #[must_use]
    pub fn strategy(&self) -> Option<&MixedStrategy> {
        self.equilibrium.as_ref().map(|eq| &eq.strategy)
    }

    /// The game value, if the solve succeeded.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        self.equilibrium.map(|eq| eq.value)
    }
}

/// Computes maximin strategies by linear programming.
///
/// ## Usage
///
/// ```no_run
/// use maximin_lp::{EquilibriumSolver, SolverConfig, PAYOFFS};
///
/// let solver = EquilibriumSolver::new(SolverConfig::default());
/// let solution = solver.solve(&PAYOFFS).unwrap();
/// println!("{}: {:?}", solution.status, solution.strategy());
/// ```
#[derive(Clone, Debug)]
pub struct EquilibriumSolver<B: LpBackend = ConicBackend> {
    backend: B,
    config: SolverConfig,
}

impl EquilibriumSolver<ConicBackend> {
    /// Create a solver using the `totsu` backend.
    #[must_use]
    pub fn new(config: SolverConfig) -> Self {
        Self::with_backend(ConicBackend::new(), config)
    }
}

impl<B: LpBackend> EquilibriumSolver<B> {
    /// Create a solver with a custom backend.
    #[must_use]
    pub fn with_backend(backend: B, config: SolverConfig) -> Self {
        Self { backend, config }
    }

    #[must_use]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve for the row player's maximin strategy of `matrix`.
    ///
    /// A non-optimal solver status is not an error: it is returned in the
    /// [`Solution`] with no equilibrium attached. Errors only come from
    /// malformed programs or backends returning too few values.
    pub fn solve(&self, matrix: &PayoffMatrix) -> Result<Solution> {
        let program = maximin_program(matrix, self.config.nonnegative)?;
        let lp_solution = self.backend.solve(&program, &self.config);

        let values = match (lp_solution.status, lp_solution.values) {
            (SolveStatus::Optimal, Some(values)) => values,
            (status, _) => {
                warn!("maximin solve ended with status '{}'", status);
                let status = if status.is_optimal() {
                    SolveStatus::Unknown
                } else {
                    status
                };
                return Ok(Solution {
                    status,
                    equilibrium: None,
                });
            }
        };

        if values.len() != VARIABLE_COUNT {
            return Err(Error::DimensionMismatch {
                expected: VARIABLE_COUNT,
                found: values.len(),
            });
        }

        let mut probabilities = [0.0; STRATEGY_COUNT];
        probabilities.copy_from_slice(&values[..STRATEGY_COUNT]);
        let equilibrium = Equilibrium::new(
            MixedStrategy::from_raw(probabilities),
            values[VALUE_INDEX],
        );

        info!(
            "maximin value {:.6} with strategy {:?}",
            equilibrium.value,
            equilibrium.strategy.probabilities()
        );
        if let Err(err) = equilibrium.verify(matrix, self.config.tolerance) {
            warn!("solver point fails verification: {}", err);
        }

        Ok(Solution {
            status: SolveStatus::Optimal,
            equilibrium: Some(equilibrium),
        })
    }
}
