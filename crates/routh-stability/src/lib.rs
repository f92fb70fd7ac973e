//! # Routh-Hurwitz Stability Analysis
//!
//! Decides the stability of a linear time-invariant system from the
//! coefficients of its characteristic polynomial, without solving for roots.
//!
//! ## Pipeline
//!
//! 1. Build the Routh array ([`routh_array`]), resolving zero pivots with the
//!    infinitesimal marker ε and vanished rows with the auxiliary polynomial
//! 2. Classify the first column: stable when every entry tends to a strictly
//!    positive value and no row vanished
//! 3. Count first-column sign changes: the number of roots with positive real
//!    part
//! 4. Optionally locate those roots numerically as a cross-check
//!
//! ## Usage
//!
//! ```rust
//! use routh_core::Polynomial;
//! use routh_stability::analyze;
//!
//! let polynomial = Polynomial::from_integers("s", &[1, 0, -3, 2]).unwrap();
//! let result = analyze(&polynomial).unwrap();
//!
//! assert!(!result.is_stable());
//! assert_eq!(result.non_negative_real_part_root_count(), 2);
//! println!("{result}");
//! ```

pub mod analysis;
pub mod evaluator;
pub mod report;
pub mod types;

// Re-exports
pub use analysis::{analyze, RouthHurwitzAnalyzer};
pub use evaluator::{classify, count_sign_changes, sign};
pub use report::format_root;
pub use types::{CrossCheck, StabilityResult, StabilityStatus, UnstableReason};
