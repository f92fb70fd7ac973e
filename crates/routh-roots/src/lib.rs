//! # Routh Roots
//!
//! Independent root computation used to corroborate the Routh-Hurwitz
//! sign-change count. Nothing here feeds the stability verdict.
//!
//! The default solver builds the companion matrix of the polynomial and reads
//! the roots off its real Schur decomposition, falling back to the
//! Aberth-Ehrlich iteration when that does not converge. Any other solver can
//! be plugged in through [`routh_core::RootLocator`].

pub mod aberth;
pub mod companion;

pub use aberth::AberthLocator;
pub use companion::CompanionMatrixLocator;

use num_complex::Complex64;
use routh_core::{Polynomial, Result, RootLocator};

/// Round to `precision` decimal places, mapping `-0.0` to `0.0`
///
/// Values too large to scale are already integral at that precision and are
/// returned unchanged.
pub fn round_to(value: f64, precision: u32) -> f64 {
    let scale = 10f64.powi(precision as i32);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = scaled.round() / scale;
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Round both parts of a complex number to `precision` decimal places
pub fn round_complex(value: Complex64, precision: u32) -> Complex64 {
    Complex64::new(round_to(value.re, precision), round_to(value.im, precision))
}

/// Roots of `polynomial` whose real part is strictly positive
///
/// Roots are rounded to `precision` decimal places *before* filtering, so a
/// root on the imaginary axis that the solver places at `1e-17 ± i` is not
/// reported. Results are ordered by real part, then imaginary part. A
/// constant polynomial has no roots to report.
pub fn positive_real_part_roots<L: RootLocator>(
    locator: &L,
    polynomial: &Polynomial,
    precision: u32,
) -> Result<Vec<Complex64>> {
    if polynomial.degree() == 0 {
        return Ok(Vec::new());
    }
    let mut roots: Vec<Complex64> = locator
        .roots(polynomial)?
        .into_iter()
        .map(|root| round_complex(root, precision))
        .filter(|root| root.re > 0.0)
        .collect();
    roots.sort_by(|a, b| a.re.total_cmp(&b.re).then(a.im.total_cmp(&b.im)));
    Ok(roots)
}
