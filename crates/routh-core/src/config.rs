//! Configuration for a stability analysis run

use crate::error::{Error, Result};

/// Largest number of decimal places that still means something for an `f64` root
pub const MAX_ROOT_PRECISION: u32 = 15;

/// Parameters controlling a Routh-Hurwitz analysis
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisConfig {
    /// Decimal places used to round reported roots
    pub root_precision: u32,
    /// Whether to compute the roots with positive real part as a cross-check
    pub cross_check_roots: bool,
    /// Multiply the polynomial by -1 first when its leading coefficient is negative
    pub normalize_leading_sign: bool,
    /// Convergence tolerance of the eigenvalue solver
    pub root_tolerance: f64,
    /// Iteration cap of the eigenvalue solver; 0 means unbounded
    pub max_root_iterations: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            root_precision: 5,
            cross_check_roots: true,
            normalize_leading_sign: false,
            root_tolerance: f64::EPSILON,
            max_root_iterations: 10_000,
        }
    }
}

impl AnalysisConfig {
    /// Set the number of decimal places for reported roots
    pub fn with_root_precision(mut self, precision: u32) -> Self {
        self.root_precision = precision;
        self
    }

    /// Enable or disable the root cross-check
    pub fn with_cross_check(mut self, enabled: bool) -> Self {
        self.cross_check_roots = enabled;
        self
    }

    /// Enable or disable leading-sign normalization
    pub fn with_normalized_sign(mut self, enabled: bool) -> Self {
        self.normalize_leading_sign = enabled;
        self
    }

    /// Set the eigenvalue solver's tolerance and iteration cap
    pub fn with_solver(mut self, tolerance: f64, max_iterations: usize) -> Self {
        self.root_tolerance = tolerance;
        self.max_root_iterations = max_iterations;
        self
    }

    /// Check that all parameters are usable
    pub fn validate(&self) -> Result<()> {
        if self.root_precision > MAX_ROOT_PRECISION {
            return Err(Error::InvalidParameter(format!(
                "root precision {} exceeds {MAX_ROOT_PRECISION} decimal places",
                self.root_precision
            )));
        }
        if !self.root_tolerance.is_finite() || self.root_tolerance <= 0.0 {
            return Err(Error::InvalidParameter(format!(
                "root tolerance must be finite and positive, got {}",
                self.root_tolerance
            )));
        }
        Ok(())
    }
}
