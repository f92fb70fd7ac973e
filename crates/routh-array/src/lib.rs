//! # Routh Array
//!
//! Construction of the Routh array from the coefficients of a characteristic
//! polynomial, including the two classical degenerate cases:
//!
//! - a zero pivot, resolved by substituting the infinitesimal marker ε
//! - a whole row of zeros, resolved with the derivative of the auxiliary
//!   polynomial formed from the row above
//!
//! ## Usage
//!
//! ```rust
//! use routh_array::build_routh_array;
//! use routh_core::Polynomial;
//!
//! let polynomial = Polynomial::from_integers("s", &[1, 3, 3, 1]).unwrap();
//! let array = build_routh_array(&polynomial).unwrap();
//!
//! println!("{}", array.evaluate());
//! ```

pub mod array;
pub mod builder;

pub use array::{column_count, Degeneracy, EvaluatedArray, RouthArray};
pub use builder::{auxiliary_derivative, build_routh_array, complete_row, seed_rows};
