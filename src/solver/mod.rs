//! Maximin equilibrium solving.
//!
//! [`maximin_program`] turns a payoff matrix into a linear program,
//! [`EquilibriumSolver`] hands it to an LP backend and reads the strategy and
//! value back out, and [`Report`] renders the result for the terminal.

pub mod formulation;
pub mod maximin;
pub mod report;

pub use formulation::{maximin_program, VALUE_INDEX, VARIABLE_COUNT};
pub use maximin::{EquilibriumSolver, Solution};
pub use report::Report;
