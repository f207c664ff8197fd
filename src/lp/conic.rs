//! LP backend built on the `totsu` primal-dual conic solver.

use log::{debug, warn};
use totsu::prelude::*;
use totsu::problem::ProbLP;
use totsu::MatBuild;

use crate::core::SolverConfig;

use super::backend::{LpBackend, LpSolution};
use super::program::{Constraint, LinearProgram};
use super::status::SolveStatus;

type La = FloatGeneric<f64>;
type AMatBuild = MatBuild<La>;
type AProbLP = ProbLP<La>;
type ASolver = Solver<La>;

/// Solves programs with `totsu`.
///
/// The solver has no randomness: the same program and config always yield
/// the same point.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConicBackend;

impl ConicBackend {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl LpBackend for ConicBackend {
    fn solve(&self, program: &LinearProgram, config: &SolverConfig) -> LpSolution {
        let n = program.num_vars();

        let mut vec_c = AMatBuild::new(MatType::General(n, 1));
        for (i, &c) in program.objective().iter().enumerate() {
            vec_c[(i, 0)] = c;
        }

        let (mat_g, vec_h) = build_rows(program.inequalities(), n);
        let (mat_a, vec_b) = build_rows(program.equalities(), n);

        debug!(
            "solving LP: {} vars, {} inequalities, {} equalities",
            n,
            program.inequalities().len(),
            program.equalities().len()
        );

        let eps_acc = config.eps_acc;
        let eps_inf = config.eps_inf;
        let max_iter = config.max_iter;
        let solver = ASolver::new().par(|par| {
            par.eps_acc = eps_acc;
            par.eps_inf = eps_inf;
            par.max_iter = max_iter;
        });

        let mut lp = AProbLP::new(vec_c, mat_g, vec_h, mat_a, vec_b);
        match solver.solve(lp.problem()) {
            Ok((x, _y)) => {
                let values: Vec<f64> = x.iter().take(n).copied().collect();
                debug!("optimal point: {:?}", values);
                LpSolution::optimal(values)
            }
            Err(err) => {
                let status = match err {
                    SolverError::Infeasible => SolveStatus::PrimalInfeasible,
                    SolverError::Unbounded => SolveStatus::DualInfeasible,
                    _ => SolveStatus::Unknown,
                };
                warn!("LP solve failed: {:?} ({})", err, status);
                LpSolution::failed(status)
            }
        }
    }
}

/// Dense `(matrix, rhs)` pair for a block of rows.
fn build_rows(rows: &[Constraint], n: usize) -> (AMatBuild, AMatBuild) {
    let mut mat = AMatBuild::new(MatType::General(rows.len(), n));
    let mut rhs = AMatBuild::new(MatType::General(rows.len(), 1));

    for (r, row) in rows.iter().enumerate() {
        for (c, &a) in row.coefficients.iter().enumerate() {
            mat[(r, c)] = a;
        }
        rhs[(r, 0)] = row.rhs;
    }

    (mat, rhs)
}
