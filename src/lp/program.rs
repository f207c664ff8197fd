//! Dense linear programs in standard form.
//!
//! ```text
//! minimize    c'x
//! subject to  G x <= h
//!             A x  = b
//! ```
//!
//! Variables are free unless a row bounds them.

use crate::core::{Error, Result};

/// A single linear row `coefficients . x (op) rhs`.
#[derive(Clone, Debug, PartialEq)]
pub struct Constraint {
    pub coefficients: Vec<f64>,
    pub rhs: f64,
}

impl Constraint {
    /// Left-hand side evaluated at `x`.
    #[must_use]
    pub fn lhs(&self, x: &[f64]) -> f64 {
        self.coefficients.iter().zip(x).map(|(a, xi)| a * xi).sum()
    }
}

/// A minimization LP over `num_vars` free variables.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearProgram {
    objective: Vec<f64>,
    inequalities: Vec<Constraint>,
    equalities: Vec<Constraint>,
}

impl LinearProgram {
    /// Start a program minimizing `objective . x`.
    ///
    /// The objective length fixes the number of variables.
    #[must_use]
    pub fn minimize(objective: Vec<f64>) -> Self {
        Self {
            objective,
            inequalities: Vec::new(),
            equalities: Vec::new(),
        }
    }

    #[must_use]
    pub fn num_vars(&self) -> usize {
        self.objective.len()
    }

    #[must_use]
    pub fn objective(&self) -> &[f64] {
        &self.objective
    }

    /// Rows of `G x <= h`.
    #[must_use]
    pub fn inequalities(&self) -> &[Constraint] {
        &self.inequalities
    }

    /// Rows of `A x = b`.
    #[must_use]
    pub fn equalities(&self) -> &[Constraint] {
        &self.equalities
    }

    /// Add `coefficients . x <= rhs`.
    pub fn add_le(&mut self, coefficients: Vec<f64>, rhs: f64) -> Result<()> {
        let row = self.row(coefficients, rhs)?;
        self.inequalities.push(row);
        Ok(())
    }

    /// Add `coefficients . x >= rhs`, stored negated as a `<=` row.
    pub fn add_ge(&mut self, coefficients: Vec<f64>, rhs: f64) -> Result<()> {
        let negated = coefficients.into_iter().map(|a| -a).collect();
        self.add_le(negated, -rhs)
    }

    /// Add `coefficients . x = rhs`.
    pub fn add_eq(&mut self, coefficients: Vec<f64>, rhs: f64) -> Result<()> {
        let row = self.row(coefficients, rhs)?;
        self.equalities.push(row);
        Ok(())
    }

    /// Objective evaluated at `x`.
    #[must_use]
    pub fn objective_value(&self, x: &[f64]) -> f64 {
        self.objective.iter().zip(x).map(|(c, xi)| c * xi).sum()
    }

    /// Largest constraint violation at `x` (0 when feasible).
    #[must_use]
    pub fn max_violation(&self, x: &[f64]) -> f64 {
        let le = self.inequalities.iter().map(|row| row.lhs(x) - row.rhs);
        let eq = self.equalities.iter().map(|row| (row.lhs(x) - row.rhs).abs());
        le.chain(eq).fold(0.0, f64::max)
    }

    fn row(&self, coefficients: Vec<f64>, rhs: f64) -> Result<Constraint> {
        if coefficients.len() != self.num_vars() {
            return Err(Error::DimensionMismatch {
                expected: self.num_vars(),
                found: coefficients.len(),
            });
        }
        Ok(Constraint { coefficients, rhs })
    }
}
