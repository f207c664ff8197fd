//! The maximin linear program.
//!
//! Variables are `pi[0..STRATEGY_COUNT]` followed by the game value `V`:
//!
//! ```text
//! maximize    V                       (minimize -V)
//! subject to  sum_i pi[i] * M[i][j] >= V    for each column j
//!             sum_i pi[i] = 1
//!             pi[i] >= 0                    (when `nonnegative`)
//! ```

use crate::core::Result;
use crate::game::{PayoffMatrix, STRATEGY_COUNT};
use crate::lp::LinearProgram;

/// Position of `V` in the variable vector.
pub const VALUE_INDEX: usize = STRATEGY_COUNT;

/// Total number of LP variables.
pub const VARIABLE_COUNT: usize = STRATEGY_COUNT + 1;

/// Build the maximin program for the row player of `matrix`.
pub fn maximin_program(matrix: &PayoffMatrix, nonnegative: bool) -> Result<LinearProgram> {
    let mut objective = vec![0.0; VARIABLE_COUNT];
    objective[VALUE_INDEX] = -1.0;
    let mut lp = LinearProgram::minimize(objective);

    // sum_i pi[i] * M[i][j] - V >= 0
    for j in 0..STRATEGY_COUNT {
        let mut row = vec![0.0; VARIABLE_COUNT];
        for (i, coefficient) in row.iter_mut().take(STRATEGY_COUNT).enumerate() {
            *coefficient = matrix.get(i, j);
        }
        row[VALUE_INDEX] = -1.0;
        lp.add_ge(row, 0.0)?;
    }

    let mut simplex = vec![1.0; VARIABLE_COUNT];
    simplex[VALUE_INDEX] = 0.0;
    lp.add_eq(simplex, 1.0)?;

    if nonnegative {
        for i in 0..STRATEGY_COUNT {
            let mut row = vec![0.0; VARIABLE_COUNT];
            row[i] = 1.0;
            lp.add_ge(row, 0.0)?;
        }
    }

    Ok(lp)
}
