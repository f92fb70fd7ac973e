//! Error types for Routh-Hurwitz analysis
//!
//! Provides a unified error type for all routh-hurwitz crates.

use thiserror::Error;

/// Core error type for stability analysis
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The polynomial has no non-zero coefficient, so it has no degree
    #[error("Zero polynomial has no degree")]
    ZeroPolynomial,

    /// A coefficient was requested for a power outside `[0, degree]`
    #[error("Power {power} is outside of [0, {degree}]")]
    PowerOutOfRange { power: i64, degree: usize },

    /// A division whose divisor is identically zero, even after epsilon substitution
    #[error("Division by zero: {0}")]
    DivisionByZero(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),

    /// The root solver did not produce a result
    #[error("Root finding failed: {0}")]
    RootFinding(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for a pivot that stayed zero
    pub fn zero_pivot(power: usize) -> Self {
        Self::DivisionByZero(format!("pivot above row {power} is identically zero"))
    }

    /// Create an error for a coefficient that does not fit in an `f64`
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} cannot be represented as a finite float"))
    }
}
