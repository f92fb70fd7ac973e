//! # Routh-Hurwitz Core
//!
//! Core types shared by the routh-hurwitz crates:
//!
//! - [`Polynomial`]: exact univariate polynomial, the input of an analysis
//! - [`EpsilonExpr`] and [`Limit`]: Routh array cell values, exact rational
//!   functions of the infinitesimal marker ε and their limits as ε → 0⁺
//! - [`AnalysisConfig`]: parameters of an analysis run
//! - [`RootLocator`]: seam for the root solver used by the cross-check
//! - [`Error`] and [`Result`]: the workspace-wide error type

pub mod config;
pub mod epsilon;
pub mod error;
pub mod polynomial;
pub mod traits;

pub use config::AnalysisConfig;
pub use epsilon::{EpsilonExpr, Limit, Sign, EPSILON_SYMBOL};
pub use error::{Error, Result};
pub use polynomial::Polynomial;
pub use traits::RootLocator;

// Re-exported so downstream crates and users share one rational type
pub use num_rational::BigRational;
