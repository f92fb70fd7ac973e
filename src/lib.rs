//! # Routh-Hurwitz
//!
//! Stability analysis of linear time-invariant systems from the coefficients
//! of their characteristic polynomial, with exact rational arithmetic.
//!
//! This crate re-exports the workspace crates:
//!
//! - [`routh_core`]: polynomials, ε-expressions, configuration and errors
//! - [`routh_array`]: Routh array construction and degeneracy handling
//! - [`routh_stability`]: verdicts, sign-change counting and reports
//! - [`routh_roots`]: numerical root cross-check
//! - [`routh_parse`]: polynomial expression parser
//!
//! ```rust
//! use routh_hurwitz::{analyze, parse_polynomial};
//!
//! let polynomial = parse_polynomial("s^4 + s^3 + 2s^2 + 2s + 3").unwrap();
//! let result = analyze(&polynomial).unwrap();
//! assert!(!result.is_stable());
//! assert_eq!(result.non_negative_real_part_root_count(), 2);
//! ```

pub mod cli;

pub use routh_array;
pub use routh_core;
pub use routh_parse;
pub use routh_roots;
pub use routh_stability;

pub use routh_array::{build_routh_array, Degeneracy, EvaluatedArray, RouthArray};
pub use routh_core::{AnalysisConfig, EpsilonExpr, Error, Limit, Polynomial, Result};
pub use routh_parse::{parse_polynomial, parse_polynomial_in, ParseError};
pub use routh_stability::{analyze, RouthHurwitzAnalyzer, StabilityResult, StabilityStatus};
