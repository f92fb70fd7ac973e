//! Shared utilities for integration tests

#![allow(dead_code)]

pub use approx::assert_relative_eq;

use num_bigint::BigInt;
use num_rational::BigRational;
use routh_core::{Limit, Polynomial};

/// Tolerance for comparing located roots
pub const ROOT_TOLERANCE: f64 = 1e-6;

/// Polynomial in `x` from integer coefficients, highest power first
pub fn poly(descending: &[i64]) -> Polynomial {
    Polynomial::from_integers("x", descending).unwrap()
}

/// Exact rational `n / d`
pub fn q(n: i64, d: i64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

/// Finite limit `n / d`
pub fn finite(n: i64, d: i64) -> Limit {
    Limit::Finite(q(n, d))
}

/// Multiply two polynomials given highest power first
pub fn multiply(a: &[i64], b: &[i64]) -> Vec<i64> {
    let mut out = vec![0i64; a.len() + b.len() - 1];
    for (i, x) in a.iter().enumerate() {
        for (j, y) in b.iter().enumerate() {
            out[i + j] += x * y;
        }
    }
    out
}

/// Expand a product of factors, each given highest power first
pub fn expand(factors: &[Vec<i64>]) -> Vec<i64> {
    factors.iter().fold(vec![1], |acc, f| multiply(&acc, f))
}

/// Factor `(x - r)`
pub fn real_root(r: i64) -> Vec<i64> {
    vec![1, -r]
}

/// Factor `x^2 - 2a x + a^2 + b^2` with roots `a ± bi`
pub fn complex_pair(a: i64, b: i64) -> Vec<i64> {
    vec![1, -2 * a, a * a + b * b]
}
