//! Reading the verdict off a completed Routh array

use crate::types::{StabilityStatus, UnstableReason};
use routh_array::{Degeneracy, RouthArray};
use routh_core::{EpsilonExpr, Sign};

/// Sign of a cell
///
/// The literal marker ε is positive by convention; every other cell takes
/// the ordinary sign of its limit as ε → 0⁺.
pub fn sign(cell: &EpsilonExpr) -> Sign {
    if cell.is_marker() {
        Sign::Positive
    } else {
        cell.limit().signum()
    }
}

/// Number of adjacent first-column pairs whose signs differ
///
/// By the Routh-Hurwitz theorem this is the number of roots with strictly
/// positive real part.
pub fn count_sign_changes(array: &RouthArray) -> usize {
    let signs: Vec<Sign> = array.first_column().map(sign).collect();
    signs.windows(2).filter(|pair| pair[0] != pair[1]).count()
}

/// Classify the array
///
/// The system is stable when every first-column entry tends to a strictly
/// positive value (ε itself tends to zero and so does not count) and no row
/// vanished along the way. A vanished row means roots placed symmetrically
/// about the origin, which always includes a root with non-negative real
/// part.
pub fn classify(array: &RouthArray) -> StabilityStatus {
    if let Some(Degeneracy::ZeroRow { power, .. }) = array
        .degeneracies()
        .iter()
        .find(|d| matches!(d, Degeneracy::ZeroRow { .. }))
    {
        return StabilityStatus::Unstable {
            reason: UnstableReason::SymmetricRoots { power: *power },
        };
    }

    let first_non_positive = array
        .first_column()
        .enumerate()
        .find(|(_, cell)| !cell.limit().is_positive());
    match first_non_positive {
        Some((row, cell)) => StabilityStatus::Unstable {
            reason: UnstableReason::NonPositivePivot {
                power: array.power_of(row),
                limit: cell.limit(),
            },
        },
        None => StabilityStatus::Stable,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use routh_array::build_routh_array;
    use routh_core::{BigRational, Limit, Polynomial};

    fn q(n: i64) -> BigRational {
        BigRational::from_integer(n.into())
    }

    fn array(descending: &[i64]) -> RouthArray {
        build_routh_array(&Polynomial::from_integers("x", descending).unwrap()).unwrap()
    }

    #[test]
    fn test_marker_sign_is_positive() {
        assert_eq!(sign(&EpsilonExpr::marker()), Sign::Positive);
        assert_eq!(sign(&EpsilonExpr::zero()), Sign::Zero);
        assert_eq!(sign(&EpsilonExpr::marker().scale(&q(2))), Sign::Zero);
    }

    #[test]
    fn test_sign_changes_regular() {
        assert_eq!(count_sign_changes(&array(&[1, 3, 3, 1])), 0);
        // x^3 - 3x + 2 = (x - 1)^2 (x + 2)
        assert_eq!(count_sign_changes(&array(&[1, 0, -3, 2])), 2);
    }

    #[test]
    fn test_sign_changes_through_marker() {
        // 1, 1, ε, -∞, 3
        assert_eq!(count_sign_changes(&array(&[1, 1, 2, 2, 3])), 2);
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify(&array(&[1, 3, 3, 1])), StabilityStatus::Stable);

        assert_eq!(
            classify(&array(&[1, 2, 1, 2])),
            StabilityStatus::Unstable {
                reason: UnstableReason::SymmetricRoots { power: 1 }
            }
        );

        // ε in the x^2 row tends to zero, so the pivot is not positive
        assert_eq!(
            classify(&array(&[1, 1, 2, 2, 3])),
            StabilityStatus::Unstable {
                reason: UnstableReason::NonPositivePivot {
                    power: 2,
                    limit: Limit::Finite(q(0)),
                }
            }
        );

        // Negative leading coefficient fails the strict positivity rule
        assert_eq!(
            classify(&array(&[-1, -1])),
            StabilityStatus::Unstable {
                reason: UnstableReason::NonPositivePivot {
                    power: 1,
                    limit: Limit::Finite(q(-1)),
                }
            }
        );
    }
}
