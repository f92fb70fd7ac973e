//! Property-based tests for the stability verdict
//!
//! Polynomials are assembled from chosen roots, so the number of roots in the
//! right half plane is known exactly. Root sets are kept off the imaginary
//! axis and free of pairs symmetric about the origin.

mod common;

use common::*;
use proptest::prelude::*;
use routh_stability::{analyze, count_sign_changes};

#[derive(Debug, Clone)]
struct RootSet {
    real: Vec<i64>,
    pairs: Vec<(i64, i64)>,
}

impl RootSet {
    fn degree(&self) -> usize {
        self.real.len() + 2 * self.pairs.len()
    }

    fn right_half_plane_count(&self) -> usize {
        self.real.iter().filter(|r| **r > 0).count()
            + 2 * self.pairs.iter().filter(|(a, _)| *a > 0).count()
    }

    fn has_mirrored_roots(&self) -> bool {
        let real_mirrored = self
            .real
            .iter()
            .any(|r| self.real.contains(&-r));
        let pair_mirrored = self
            .pairs
            .iter()
            .any(|(a, b)| self.pairs.contains(&(-a, *b)));
        real_mirrored || pair_mirrored
    }

    fn coefficients(&self) -> Vec<i64> {
        let factors: Vec<Vec<i64>> = self
            .real
            .iter()
            .map(|r| real_root(*r))
            .chain(self.pairs.iter().map(|(a, b)| complex_pair(*a, *b)))
            .collect();
        expand(&factors)
    }
}

fn nonzero(range: i64) -> impl Strategy<Value = i64> {
    (1..=range, any::<bool>()).prop_map(|(v, negative)| if negative { -v } else { v })
}

fn root_set() -> impl Strategy<Value = RootSet> {
    (
        prop::collection::vec(nonzero(5), 0..=3),
        prop::collection::vec((nonzero(3), 1i64..=3), 0..=2),
    )
        .prop_map(|(real, pairs)| RootSet { real, pairs })
}

/// Roots on the imaginary axis or at the origin times a stable part
#[derive(Debug, Clone)]
struct BoundarySet {
    stable: RootSet,
    /// `(b, k)`: the factor `(x^2 + b^2)^k`
    axis_pairs: Vec<(i64, u32)>,
    origin_multiplicity: u32,
}

impl BoundarySet {
    fn coefficients(&self) -> Vec<i64> {
        let mut factors = vec![self.stable.coefficients()];
        for (b, k) in &self.axis_pairs {
            for _ in 0..*k {
                factors.push(complex_pair(0, *b));
            }
        }
        for _ in 0..self.origin_multiplicity {
            factors.push(vec![1, 0]);
        }
        expand(&factors)
    }
}

fn stable_root_set() -> impl Strategy<Value = RootSet> {
    (
        prop::collection::vec(-5i64..=-1, 0..=2),
        prop::collection::vec((-3i64..=-1, 1i64..=3), 0..=1),
    )
        .prop_map(|(real, pairs)| RootSet { real, pairs })
}

fn boundary_set() -> impl Strategy<Value = BoundarySet> {
    (
        stable_root_set(),
        prop::collection::vec((1i64..=3, 1u32..=2), 0..=2),
        0u32..=3,
    )
        .prop_map(|(stable, axis_pairs, origin_multiplicity)| BoundarySet {
            stable,
            axis_pairs,
            origin_multiplicity,
        })
}

proptest! {
    #[test]
    fn prop_sign_changes_count_right_half_plane_roots(roots in root_set()) {
        prop_assume!(roots.degree() >= 1);
        prop_assume!(!roots.has_mirrored_roots());

        let result = analyze(&poly(&roots.coefficients())).unwrap();
        prop_assert_eq!(
            result.non_negative_real_part_root_count(),
            roots.right_half_plane_count()
        );
        prop_assert_eq!(
            count_sign_changes(result.symbolic_array()),
            roots.right_half_plane_count()
        );
    }

    #[test]
    fn prop_stable_iff_all_roots_in_left_half_plane(roots in root_set()) {
        prop_assume!(roots.degree() >= 1);
        prop_assume!(!roots.has_mirrored_roots());

        let result = analyze(&poly(&roots.coefficients())).unwrap();
        prop_assert_eq!(result.is_stable(), roots.right_half_plane_count() == 0);
        prop_assert!(!result.symbolic_array().has_zero_row());
    }

    #[test]
    fn prop_cross_check_agrees_off_the_axis(roots in root_set()) {
        prop_assume!(roots.degree() >= 1);
        prop_assume!(!roots.has_mirrored_roots());

        let result = analyze(&poly(&roots.coefficients())).unwrap();
        prop_assert_eq!(result.cross_check_agrees(), Some(true));
        for root in result.non_negative_real_part_roots() {
            prop_assert!(root.re > 0.0);
        }
    }

    #[test]
    fn prop_positive_scaling_preserves_verdict(roots in root_set(), factor in 1i64..=7) {
        prop_assume!(roots.degree() >= 1);

        let coefficients = roots.coefficients();
        let scaled: Vec<i64> = coefficients.iter().map(|c| c * factor).collect();
        let original = analyze(&poly(&coefficients)).unwrap();
        let rescaled = analyze(&poly(&scaled)).unwrap();
        prop_assert_eq!(original.is_stable(), rescaled.is_stable());
        prop_assert_eq!(
            original.non_negative_real_part_root_count(),
            rescaled.non_negative_real_part_root_count()
        );
    }

    #[test]
    fn prop_boundary_roots_yield_unstable_result(set in boundary_set()) {
        prop_assume!(!set.axis_pairs.is_empty() || set.origin_multiplicity > 0);

        let result = analyze(&poly(&set.coefficients()));
        prop_assert!(result.is_ok(), "{:?}", result);
        let result = result.unwrap();
        prop_assert!(!result.is_stable());
        prop_assert!(!result.degeneracies().is_empty());
        prop_assert!(result.non_negative_real_part_roots().is_empty());
    }
}
