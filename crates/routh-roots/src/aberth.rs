//! Simultaneous root iteration (Aberth-Ehrlich)
//!
//! Every root estimate is refined at once with the Newton step corrected by
//! the repulsion of the other estimates:
//!
//! ```text
//! w_i = (p/p')(z_i) / (1 - (p/p')(z_i) · Σ_{j≠i} 1/(z_i - z_j))
//! ```
//!
//! An estimate stops moving once `|p(z_i)|` is within rounding error of the
//! polynomial's magnitude at `z_i`. That backward-error test also settles
//! repeated roots and roots on the imaginary axis, where the real Schur
//! iteration on a companion matrix can stall.

use num_complex::Complex64;
use routh_core::{Error, Polynomial, Result, RootLocator};
use std::f64::consts::PI;
use tracing::{debug, instrument};

/// Iteration cap used when none is given
pub const DEFAULT_MAX_ITERATIONS: usize = 500;

/// Root locator based on the Aberth-Ehrlich iteration
#[derive(Debug, Clone, PartialEq)]
pub struct AberthLocator {
    max_iterations: usize,
}

impl Default for AberthLocator {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl AberthLocator {
    /// Create a locator with an explicit iteration cap; 0 selects the default
    pub fn new(max_iterations: usize) -> Self {
        let max_iterations = if max_iterations == 0 {
            DEFAULT_MAX_ITERATIONS
        } else {
            max_iterations
        };
        Self { max_iterations }
    }

    /// Roots for coefficients in increasing power order
    pub fn locate(&self, coefficients: &[f64]) -> Result<Vec<Complex64>> {
        aberth_roots(coefficients, self.max_iterations)
    }
}

impl RootLocator for AberthLocator {
    #[instrument(skip(self, polynomial), fields(degree = polynomial.degree()))]
    fn roots(&self, polynomial: &Polynomial) -> Result<Vec<Complex64>> {
        self.locate(&polynomial.to_f64_coefficients()?)
    }

    fn method_name(&self) -> &str {
        "aberth"
    }
}

/// All roots of the polynomial with `coefficients` in increasing power order
///
/// The leading coefficient must be non-zero.
pub fn aberth_roots(coefficients: &[f64], max_iterations: usize) -> Result<Vec<Complex64>> {
    let degree = coefficients.len().saturating_sub(1);
    if degree == 0 {
        return Ok(Vec::new());
    }
    let lead = coefficients[degree];
    if lead == 0.0 || !lead.is_finite() {
        return Err(Error::InvalidParameter(
            "leading coefficient must be finite and non-zero".to_string(),
        ));
    }
    let monic: Vec<f64> = coefficients.iter().map(|c| c / lead).collect();
    let magnitudes: Vec<f64> = monic.iter().map(|c| c.abs()).collect();

    let mut roots = initial_estimates(&monic);
    let mut settled = vec![false; degree];

    for iteration in 0..max_iterations {
        for i in 0..degree {
            if settled[i] {
                continue;
            }
            let z = roots[i];
            let (value, derivative) = horner(&monic, z);
            let bound = horner_magnitude(&magnitudes, z.norm());
            if value.norm() <= 4.0 * f64::EPSILON * bound {
                settled[i] = true;
                continue;
            }

            let ratio = value / derivative;
            let repulsion: Complex64 = roots
                .iter()
                .enumerate()
                .filter(|(j, _)| *j != i)
                .map(|(_, other)| (z - *other).inv())
                .sum();
            let step = ratio / (Complex64::new(1.0, 0.0) - ratio * repulsion);
            if step.re.is_finite() && step.im.is_finite() {
                roots[i] = z - step;
            }
        }

        if settled.iter().all(|s| *s) {
            debug!(iterations = iteration + 1, "aberth iteration settled");
            return Ok(roots);
        }
    }

    Err(Error::RootFinding(format!(
        "Aberth iteration did not settle within {max_iterations} iterations"
    )))
}

/// Estimates spread on a circle with the scale of the root magnitudes
fn initial_estimates(monic: &[f64]) -> Vec<Complex64> {
    let degree = monic.len() - 1;
    let radius = monic[..degree]
        .iter()
        .enumerate()
        .map(|(k, c)| c.abs().powf(1.0 / (degree - k) as f64))
        .fold(0.0_f64, f64::max)
        .max(f64::MIN_POSITIVE);
    // Offset angle avoids starting on a symmetry axis of the roots
    (0..degree)
        .map(|k| Complex64::from_polar(radius, 2.0 * PI * k as f64 / degree as f64 + 0.4))
        .collect()
}

/// `p(z)` and `p'(z)` for coefficients in increasing power order
fn horner(coefficients: &[f64], z: Complex64) -> (Complex64, Complex64) {
    let mut value = Complex64::new(0.0, 0.0);
    let mut derivative = Complex64::new(0.0, 0.0);
    for c in coefficients.iter().rev() {
        derivative = derivative * z + value;
        value = value * z + *c;
    }
    (value, derivative)
}

fn horner_magnitude(magnitudes: &[f64], r: f64) -> f64 {
    magnitudes.iter().rev().fold(0.0, |acc, c| acc * r + c)
}
