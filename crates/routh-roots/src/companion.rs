//! Roots as eigenvalues of the companion matrix
//!
//! For `p(x) = a_n x^n + ... + a_1 x + a_0` the companion matrix of the
//! monic polynomial `p(x) / a_n` is
//!
//! ```text
//! | 0 0 ... 0 -a_0/a_n     |
//! | 1 0 ... 0 -a_1/a_n     |
//! | 0 1 ... 0 -a_2/a_n     |
//! | ...                    |
//! | 0 0 ... 1 -a_(n-1)/a_n |
//! ```
//!
//! and its eigenvalues are exactly the roots of `p`. They are read off a real
//! Schur decomposition, which yields complex-conjugate pairs from its 2x2
//! diagonal blocks.
//!
//! Roots at the origin are split off exactly before the matrix is built.
//! When the Schur iteration does not converge, which happens for companion
//! matrices close to a permutation such as that of `x^4 + 1`, the roots are
//! located with [`crate::aberth`] instead.

use crate::aberth::AberthLocator;
use nalgebra::linalg::Schur;
use nalgebra::DMatrix;
use num_complex::Complex64;
use num_traits::Zero;
use routh_core::{Error, Polynomial, Result, RootLocator};
use tracing::{debug, instrument, warn};

/// Root locator based on the eigenvalues of the companion matrix
#[derive(Debug, Clone, PartialEq)]
pub struct CompanionMatrixLocator {
    tolerance: f64,
    max_iterations: usize,
}

impl Default for CompanionMatrixLocator {
    fn default() -> Self {
        Self {
            tolerance: f64::EPSILON,
            max_iterations: 10_000,
        }
    }
}

impl CompanionMatrixLocator {
    /// Create a locator with an explicit Schur tolerance and iteration cap
    ///
    /// An iteration cap of 0 lets the decomposition run until it converges.
    pub fn new(tolerance: f64, max_iterations: usize) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Companion matrix of `polynomial`, made monic first
    pub fn companion_matrix(polynomial: &Polynomial) -> Result<DMatrix<f64>> {
        Ok(companion_from_coefficients(&polynomial.to_f64_coefficients()?))
    }
}

/// Companion matrix for coefficients in increasing power order
fn companion_from_coefficients(coefficients: &[f64]) -> DMatrix<f64> {
    let n = coefficients.len() - 1;
    let lead = coefficients[n];
    DMatrix::from_fn(n, n, |row, col| {
        if col == n - 1 {
            -coefficients[row] / lead
        } else if row == col + 1 {
            1.0
        } else {
            0.0
        }
    })
}

impl RootLocator for CompanionMatrixLocator {
    #[instrument(skip(self, polynomial), fields(degree = polynomial.degree()))]
    fn roots(&self, polynomial: &Polynomial) -> Result<Vec<Complex64>> {
        if polynomial.degree() == 0 {
            return Ok(Vec::new());
        }

        let coefficients = polynomial.to_f64_coefficients()?;
        // Exact zero roots; the leading coefficient is non-zero
        let zeros = polynomial
            .coefficients()
            .iter()
            .take_while(|c| c.is_zero())
            .count();
        let remaining = &coefficients[zeros..];
        let mut roots = vec![Complex64::new(0.0, 0.0); zeros];

        if remaining.len() > 1 {
            let matrix = companion_from_coefficients(remaining);
            match Schur::try_new(matrix, self.tolerance, self.max_iterations) {
                Some(schur) => roots.extend(schur.complex_eigenvalues().iter().copied()),
                None => {
                    warn!(
                        max_iterations = self.max_iterations,
                        "Schur decomposition did not converge, falling back to Aberth iteration"
                    );
                    roots.extend(AberthLocator::new(self.max_iterations).locate(remaining)?);
                }
            }
        }

        if roots.iter().any(|r| !r.re.is_finite() || !r.im.is_finite()) {
            return Err(Error::non_finite("companion matrix eigenvalues"));
        }
        debug!(count = roots.len(), zeros, "located roots");
        Ok(roots)
    }

    fn method_name(&self) -> &str {
        "companion-matrix"
    }
}
