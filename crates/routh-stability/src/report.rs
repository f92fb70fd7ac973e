//! Human-readable report of a stability result

use crate::types::{CrossCheck, StabilityResult};
use num_complex::Complex64;
use std::fmt;

/// Format a root as `a`, `bi`, `a + bi` or `a - bi`
pub fn format_root(root: &Complex64) -> String {
    match (root.re == 0.0, root.im == 0.0) {
        (_, true) => format!("{}", root.re),
        (true, false) => format!("{}i", root.im),
        (false, false) if root.im < 0.0 => format!("{} - {}i", root.re, -root.im),
        (false, false) => format!("{} + {}i", root.re, root.im),
    }
}

impl fmt::Display for StabilityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verdict = if self.is_stable() { "stable" } else { "unstable" };
        writeln!(f, "System is {verdict}!")?;
        writeln!(f)?;

        if !self.is_stable() {
            writeln!(
                f,
                "Number of poles with non-negative real part: {}",
                self.non_negative_real_part_root_count()
            )?;
            match self.cross_check() {
                CrossCheck::Located(roots) => {
                    writeln!(f, "The values of the poles with non-negative real part:")?;
                    for root in roots {
                        writeln!(f, "{}", format_root(root))?;
                    }
                }
                CrossCheck::Unavailable { reason } => {
                    writeln!(f, "The values of the poles could not be computed: {reason}")?;
                }
                CrossCheck::Disabled => {}
            }
            writeln!(f)?;
        }

        writeln!(f, "Routh array:")?;
        write!(f, "{}", self.routh_array())
    }
}
