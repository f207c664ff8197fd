//! The seam between program construction and the numerical solver.

use crate::core::SolverConfig;

use super::program::LinearProgram;
use super::status::SolveStatus;

/// Result of handing a program to a backend.
#[derive(Clone, Debug, PartialEq)]
pub struct LpSolution {
    pub status: SolveStatus,
    /// Primal point, present only when `status` is optimal.
    pub values: Option<Vec<f64>>,
}

impl LpSolution {
    #[must_use]
    pub fn optimal(values: Vec<f64>) -> Self {
        Self {
            status: SolveStatus::Optimal,
            values: Some(values),
        }
    }

    /// A failed solve. The point, if the solver produced one, is discarded.
    #[must_use]
    pub fn failed(status: SolveStatus) -> Self {
        debug_assert!(!status.is_optimal());
        Self { status, values: None }
    }
}

/// An LP solver.
///
/// Backends never fail loudly: numerical trouble is folded into the
/// returned status.
pub trait LpBackend {
    /// Solve `program`, honoring the tolerances and iteration cap in `config`.
    fn solve(&self, program: &LinearProgram, config: &SolverConfig) -> LpSolution;
}
