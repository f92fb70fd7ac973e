//! Common types used in stability analysis

use num_complex::Complex64;
use routh_array::{Degeneracy, EvaluatedArray, RouthArray};
use routh_core::{Limit, Polynomial};
use std::fmt;

/// The stability status of a system
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StabilityStatus {
    /// Every first-column entry is strictly positive
    Stable,

    /// System is unstable with specific reason
    Unstable { reason: UnstableReason },
}

impl StabilityStatus {
    /// Whether the status is [`StabilityStatus::Stable`]
    pub fn is_stable(&self) -> bool {
        matches!(self, StabilityStatus::Stable)
    }
}

/// Reasons for instability
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnstableReason {
    /// The first-column entry of the row for `power` does not tend to a
    /// strictly positive value
    NonPositivePivot { power: usize, limit: Limit },

    /// The row for `power` vanished: roots lie symmetrically about the origin
    SymmetricRoots { power: usize },
}

impl fmt::Display for UnstableReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnstableReason::NonPositivePivot { power, limit } => {
                write!(f, "first-column entry of row {power} tends to {limit}")
            }
            UnstableReason::SymmetricRoots { power } => {
                write!(f, "row {power} vanished; roots are symmetric about the origin")
            }
        }
    }
}

/// Outcome of the numerical root cross-check
#[derive(Debug, Clone, PartialEq)]
pub enum CrossCheck {
    /// The cross-check was switched off in the configuration
    Disabled,

    /// The root solver failed; the Routh verdict stands on its own
    Unavailable { reason: String },

    /// Rounded roots with strictly positive real part, ordered by real then
    /// imaginary part
    Located(Vec<Complex64>),
}

impl CrossCheck {
    /// The located roots, if the cross-check ran and succeeded
    pub fn roots(&self) -> Option<&[Complex64]> {
        match self {
            CrossCheck::Located(roots) => Some(roots),
            _ => None,
        }
    }
}

/// Result of a Routh-Hurwitz analysis
///
/// Computed once per analysis and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct StabilityResult {
    polynomial: Polynomial,
    array: RouthArray,
    evaluated: EvaluatedArray,
    status: StabilityStatus,
    sign_changes: usize,
    cross_check: CrossCheck,
}

impl StabilityResult {
    /// Create a new stability result
    pub fn new(
        polynomial: Polynomial,
        array: RouthArray,
        status: StabilityStatus,
        sign_changes: usize,
        cross_check: CrossCheck,
    ) -> Self {
        let evaluated = array.evaluate();
        Self {
            polynomial,
            array,
            evaluated,
            status,
            sign_changes,
            cross_check,
        }
    }

    /// The polynomial that was analysed, after any sign normalization
    pub fn polynomial(&self) -> &Polynomial {
        &self.polynomial
    }

    /// The Routh array with every cell evaluated as ε → 0⁺
    pub fn routh_array(&self) -> &EvaluatedArray {
        &self.evaluated
    }

    /// The Routh array with symbolic cells
    pub fn symbolic_array(&self) -> &RouthArray {
        &self.array
    }

    /// Degenerate cases resolved while building the array
    pub fn degeneracies(&self) -> &[Degeneracy] {
        self.array.degeneracies()
    }

    /// Stability status, with the reason when unstable
    pub fn status(&self) -> &StabilityStatus {
        &self.status
    }

    /// Whether the system is stable
    pub fn is_stable(&self) -> bool {
        self.status.is_stable()
    }

    /// Number of first-column sign changes
    pub fn non_negative_real_part_root_count(&self) -> usize {
        self.sign_changes
    }

    /// Roots with strictly positive real part, rounded; empty when the
    /// cross-check was disabled or unavailable
    pub fn non_negative_real_part_roots(&self) -> &[Complex64] {
        self.cross_check.roots().unwrap_or(&[])
    }

    /// Outcome of the root cross-check
    pub fn cross_check(&self) -> &CrossCheck {
        &self.cross_check
    }

    /// Whether the root cross-check ran and located the roots
    pub fn roots_cross_checked(&self) -> bool {
        self.cross_check.roots().is_some()
    }

    /// Whether the cross-check found as many roots as there are sign changes
    ///
    /// `None` when no roots were located. A disagreement points at roots on
    /// the imaginary axis, not at a defect in the array.
    pub fn cross_check_agrees(&self) -> Option<bool> {
        self.cross_check
            .roots()
            .map(|roots| roots.len() == self.sign_changes)
    }
}
