//! # maximin-lp
//!
//! Mixed-strategy equilibrium of a fixed 3-strategy zero-sum game, computed
//! by linear programming.
//!
//! ## Formulation
//!
//! The row player looks for the distribution `pi` over its pure strategies
//! that maximizes the guaranteed payoff `V`:
//!
//! ```text
//! maximize V  s.t.  sum_i pi[i] * M[i][j] >= V  for every column j
//!                   sum_i pi[i] = 1,  pi >= 0
//! ```
//!
//! The LP is solved by the `totsu` conic solver behind the [`LpBackend`]
//! trait. The shipped matrix ([`PAYOFFS`]) is antisymmetric, so the value is
//! 0 and the column player's optimal strategy equals the row player's.
//!
//! ## Modules
//!
//! - `core`: Error type and solver configuration
//! - `game`: Payoff matrix, mixed strategies, equilibrium verification
//! - `lp`: Standard-form linear programs and solver backends
//! - `solver`: Maximin formulation, solve, and text report

pub mod core;
pub mod game;
pub mod lp;
pub mod solver;

// Re-export commonly used types
pub use crate::core::{Error, Result, SolverConfig};

pub use crate::game::{Equilibrium, MixedStrategy, PayoffMatrix, PAYOFFS, STRATEGY_COUNT};

pub use crate::lp::{ConicBackend, LinearProgram, LpBackend, LpSolution, SolveStatus};

pub use crate::solver::{maximin_program, EquilibriumSolver, Report, Solution};
