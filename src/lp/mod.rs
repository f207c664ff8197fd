//! Linear programming: program construction and solver backends.
//!
//! Programs are built in dense standard form ([`LinearProgram`]) and handed
//! to an [`LpBackend`]. The default backend, [`ConicBackend`], wraps the
//! `totsu` primal-dual solver.

pub mod backend;
pub mod conic;
pub mod program;
pub mod status;

pub use backend::{LpBackend, LpSolution};
pub use conic::ConicBackend;
pub use program::{Constraint, LinearProgram};
pub use status::SolveStatus;
