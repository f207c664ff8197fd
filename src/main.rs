//! Solve the shipped game once and print the status and strategy.
//!
//! Takes no arguments. Logging goes to stderr and is controlled by
//! `RUST_LOG`; the exit code is 0 whatever status the solver reports.

use anyhow::Result;
use log::info;
use maximin_lp::{EquilibriumSolver, Report, SolverConfig, PAYOFFS};

fn main() -> Result<()> {
    env_logger::init();

    let solver = EquilibriumSolver::new(SolverConfig::default());
    info!("solving maximin LP with {:?}", solver.config());

    let solution = solver.solve(&PAYOFFS)?;

    print!("{}", Report::new(&solution));
    Ok(())
}
