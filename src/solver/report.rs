//! Plain-text rendering of a solution.
//!
//! ```text
//! optimal
//! [ 4.18e-01]
//! [ 1.63e-01]
//! [ 4.18e-01]
//! ```
//!
//! Without a strategy the second part is the single line `None`.

use std::fmt;

use super::maximin::Solution;

/// Status line followed by the strategy as a column vector.
pub struct Report<'a> {
    solution: &'a Solution,
}

impl<'a> Report<'a> {
    #[must_use]
    pub fn new(solution: &'a Solution) -> Self {
        Self { solution }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.solution.status)?;
        match self.solution.strategy() {
            Some(strategy) => {
                for &p in strategy.probabilities() {
                    writeln!(f, "[{}]", format_entry(p))?;
                }
                Ok(())
            }
            None => writeln!(f, "None"),
        }
    }
}

/// Scientific notation with a sign column and a two-digit exponent,
/// e.g. ` 4.18e-01` and `-1.00e+00`.
fn format_entry(x: f64) -> String {
    let formatted = format!("{:.2e}", x);
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let lead = if mantissa.starts_with('-') { "" } else { " " };
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{lead}{mantissa}e{sign}{digits:0>2}")
        }
        // NaN and infinities have no exponent.
        None => format!("{x:>9}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Equilibrium, MixedStrategy};
    use crate::lp::SolveStatus;

    #[test]
    fn test_format_entry() {
        assert_eq!(format_entry(0.41841), " 4.18e-01");
        assert_eq!(format_entry(-1.0), "-1.00e+00");
        assert_eq!(format_entry(0.0), " 0.00e+00");
        assert_eq!(format_entry(12.5), " 1.25e+01");
        assert_eq!(format_entry(1e-12), " 1.00e-12");
        assert_eq!(format_entry(-3e-5), "-3.00e-05");
        assert_eq!(format_entry(1e100), " 1.00e+100");
        assert_eq!(format_entry(f64::NAN), "      NaN");
    }

    #[test]
    fn test_optimal_report() {
        let strategy = MixedStrategy::new([0.5, 0.25, 0.25]).unwrap();
        let solution = Solution {
            status: SolveStatus::Optimal,
            equilibrium: Some(Equilibrium::new(strategy, 0.0)),
        };

        let text = Report::new(&solution).to_string();
        assert_eq!(text, "optimal\n[ 5.00e-01]\n[ 2.50e-01]\n[ 2.50e-01]\n");
    }

    #[test]
    fn test_failed_report() {
        let solution = Solution {
            status: SolveStatus::DualInfeasible,
            equilibrium: None,
        };

        let text = Report::new(&solution).to_string();
        assert_eq!(text, "dual infeasible\nNone\n");
    }
}
