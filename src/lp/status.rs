//! Outcome of an LP solve.

use serde::{Deserialize, Serialize};

/// Status reported by an LP backend.
///
/// Display strings follow the conventional conic-solver wording, so an
/// unbounded primal shows up as `dual infeasible`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SolveStatus {
    /// An optimal point was found within tolerance.
    Optimal,
    /// No point satisfies the constraints.
    PrimalInfeasible,
    /// The objective is unbounded below.
    DualInfeasible,
    /// The solver stopped without a certificate (iteration cap, numerics).
    Unknown,
}

impl SolveStatus {
    #[must_use]
    pub fn is_optimal(self) -> bool {
        self == SolveStatus::Optimal
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SolveStatus::Optimal => "optimal",
            SolveStatus::PrimalInfeasible => "primal infeasible",
            SolveStatus::DualInfeasible => "dual infeasible",
            SolveStatus::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for SolveStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
