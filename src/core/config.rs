//! Solver configuration parameters.

use serde::{Deserialize, Serialize};

/// Solver configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Convergence tolerance passed to the LP solver (default: 1e-7).
    pub eps_acc: f64,

    /// Infeasibility detection tolerance (default: 1e-8).
    pub eps_inf: f64,

    /// Iteration cap for the LP solver (`None` = unlimited).
    pub max_iter: Option<usize>,

    /// Add `pi[i] >= 0` rows to the program.
    /// Without them the probabilities are free variables.
    pub nonnegative: bool,

    /// Slack allowed when checking an equilibrium against its invariants.
    pub tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            eps_acc: 1e-7,
            eps_inf: 1e-8,
            max_iter: Some(1_000_000),
            nonnegative: true,
            tolerance: 1e-6,
        }
    }
}

impl SolverConfig {
    /// Set the solver convergence tolerance.
    #[must_use]
    pub fn with_eps_acc(mut self, eps: f64) -> Self {
        self.eps_acc = eps;
        self
    }

    /// Set the infeasibility detection tolerance.
    #[must_use]
    pub fn with_eps_inf(mut self, eps: f64) -> Self {
        self.eps_inf = eps;
        self
    }

    /// Set the iteration cap.
    #[must_use]
    pub fn with_max_iter(mut self, max_iter: Option<usize>) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Drop the explicit non-negativity rows, leaving probabilities free.
    #[must_use]
    pub fn without_nonnegativity(mut self) -> Self {
        self.nonnegative = false;
        self
    }

    /// Set the verification tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}
