//! The fixed zero-sum game: payoffs, mixed strategies, equilibria.
//!
//! The row player picks one of [`STRATEGY_COUNT`] pure strategies, the column
//! player likewise, and the row player receives `M[i][j]` from the column
//! player. [`PAYOFFS`] is antisymmetric, so both sides share the same maximin
//! strategy and the value of the game is 0.

pub mod equilibrium;
pub mod payoff;
pub mod strategy;

pub use equilibrium::Equilibrium;
pub use payoff::{PayoffMatrix, PAYOFFS, STRATEGY_COUNT};
pub use strategy::{MixedStrategy, PROBABILITY_TOLERANCE};
