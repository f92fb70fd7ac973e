//! End-to-end analyses of small characteristic polynomials

mod common;

use common::*;
use routh_core::{AnalysisConfig, Limit};
use routh_array::Degeneracy;
use routh_stability::{analyze, CrossCheck, RouthHurwitzAnalyzer, StabilityStatus, UnstableReason};

#[test]
fn test_triple_pole_is_stable() {
    // (x + 1)^3
    let result = analyze(&poly(&[1, 3, 3, 1])).unwrap();
    assert!(result.is_stable());
    assert_eq!(result.status(), &StabilityStatus::Stable);
    assert_eq!(result.non_negative_real_part_root_count(), 0);
    assert!(result.non_negative_real_part_roots().is_empty());
    assert_eq!(result.cross_check_agrees(), Some(true));
    assert!(result.degeneracies().is_empty());
}

#[test]
fn test_double_pole_in_right_half_plane() {
    // x^3 - 3x + 2 = (x - 1)^2 (x + 2)
    let result = analyze(&poly(&[1, 0, -3, 2])).unwrap();
    assert!(!result.is_stable());
    assert_eq!(result.non_negative_real_part_root_count(), 2);

    let roots = result.non_negative_real_part_roots();
    assert!(!roots.is_empty());
    for root in roots {
        assert_relative_eq!(root.re, 1.0, epsilon = 1e-4);
    }
}

#[test]
fn test_imaginary_axis_pair() {
    // x^2 + 1 has roots ±i; real part zero is not counted as positive
    let result = analyze(&poly(&[1, 0, 1])).unwrap();
    assert!(!result.is_stable());
    assert_eq!(
        result.status(),
        &StabilityStatus::Unstable {
            reason: UnstableReason::SymmetricRoots { power: 1 }
        }
    );
    assert_eq!(result.non_negative_real_part_root_count(), 0);
    assert!(result.non_negative_real_part_roots().is_empty());
    assert_eq!(
        result.routh_array().first_column(),
        vec![&finite(1, 1), &finite(2, 1), &finite(1, 1)]
    );
}

#[test]
fn test_first_and_second_degree() {
    for (coefficients, stable) in [
        (vec![3], true),
        (vec![-3], false),
        (vec![2, 5], true),
        (vec![2, -5], false),
        (vec![-2, 5], false),
        (vec![1, 2, 3], true),
        (vec![1, -2, 3], false),
        (vec![1, 2, -3], false),
    ] {
        let result = analyze(&poly(&coefficients)).unwrap();
        assert_eq!(result.is_stable(), stable, "coefficients {coefficients:?}");
        assert!(result.degeneracies().is_empty(), "coefficients {coefficients:?}");
    }
}

#[test]
fn test_leading_sign_normalization_matches_coefficient_signs() {
    let analyzer =
        RouthHurwitzAnalyzer::new(AnalysisConfig::default().with_normalized_sign(true)).unwrap();
    for (coefficients, stable) in [
        (vec![-2, -5], true),
        (vec![2, 5], true),
        (vec![-2, 5], false),
        (vec![2, -5], false),
    ] {
        let result = analyzer.analyze(&poly(&coefficients)).unwrap();
        assert_eq!(result.is_stable(), stable, "coefficients {coefficients:?}");
    }
}

#[test]
fn test_non_positive_extreme_coefficients_are_unstable() {
    for coefficients in [
        vec![1, 2, 3, 0],
        vec![1, 2, 3, -1],
        vec![-1, 2, 3, 1],
        vec![1, 5, 10, 10, 5, -1],
    ] {
        let result = analyze(&poly(&coefficients)).unwrap();
        assert!(!result.is_stable(), "coefficients {coefficients:?}");
    }
}

#[test]
fn test_degree_zero_has_no_roots() {
    let result = analyze(&poly(&[7])).unwrap();
    assert!(result.is_stable());
    assert_eq!(result.routh_array().rows(), &[vec![finite(7, 1)]]);
    assert!(result.non_negative_real_part_roots().is_empty());
    assert_eq!(result.non_negative_real_part_root_count(), 0);
}

#[test]
fn test_fifth_order_with_complex_right_half_plane_pair() {
    // (x + 1)(x + 2)(x + 3)(x^2 - 2x + 5): roots 1 ± 2i in the right half plane
    let coefficients = expand(&[real_root(-1), real_root(-2), real_root(-3), complex_pair(1, 2)]);
    let result = analyze(&poly(&coefficients)).unwrap();
    assert!(!result.is_stable());
    assert_eq!(result.non_negative_real_part_root_count(), 2);

    let roots = result.non_negative_real_part_roots();
    assert_eq!(roots.len(), 2);
    assert_relative_eq!(roots[0].re, 1.0, epsilon = ROOT_TOLERANCE);
    assert_relative_eq!(roots[0].im, -2.0, epsilon = ROOT_TOLERANCE);
    assert_relative_eq!(roots[1].im, 2.0, epsilon = ROOT_TOLERANCE);
}

#[test]
fn test_rational_coefficients() {
    // x^2 + (1/2)x + 1/16 = (x + 1/4)^2
    let p = routh_core::Polynomial::new("x", vec![q(1, 16), q(1, 2), q(1, 1)]).unwrap();
    let result = analyze(&p).unwrap();
    assert!(result.is_stable());
    assert_eq!(
        result.routh_array().first_column(),
        vec![&finite(1, 1), &finite(1, 2), &finite(1, 16)]
    );
}

#[test]
fn test_analysis_is_idempotent() {
    let p = poly(&[1, 1, 2, 2, 3]);
    let analyzer = RouthHurwitzAnalyzer::default();
    let first = analyzer.analyze(&p).unwrap();
    let second = analyzer.analyze(&p).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
    assert!(matches!(
        first.routh_array().row(1).unwrap()[0],
        Limit::NegativeInfinity
    ));
}

#[test]
fn test_triple_root_at_origin() {
    let result = analyze(&poly(&[1, 0, 0, 0])).unwrap();
    assert!(!result.is_stable());
    assert_eq!(
        result.status(),
        &StabilityStatus::Unstable {
            reason: UnstableReason::SymmetricRoots { power: 2 }
        }
    );
    assert_eq!(result.non_negative_real_part_root_count(), 0);
    assert_eq!(result.cross_check(), &CrossCheck::Located(Vec::new()));
    assert_eq!(
        result.routh_array().first_column(),
        vec![&finite(1, 1), &finite(3, 1), &finite(6, 1), &finite(6, 1)]
    );
}

#[test]
fn test_roots_on_unit_circle_off_the_axes() {
    // x^4 + 1: roots (±1 ± i)/√2, two in the right half plane
    let result = analyze(&poly(&[1, 0, 0, 0, 1])).unwrap();
    assert!(!result.is_stable());
    assert_eq!(result.non_negative_real_part_root_count(), 2);
    assert!(result
        .degeneracies()
        .iter()
        .any(|d| matches!(d, Degeneracy::ZeroRow { power: 3, .. })));

    let roots = result.non_negative_real_part_roots();
    assert_eq!(roots.len(), 2);
    for root in roots {
        assert_relative_eq!(root.re, std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-5);
        assert_relative_eq!(root.im.abs(), std::f64::consts::FRAC_1_SQRT_2, epsilon = 1e-5);
    }
}

#[test]
fn test_repeated_imaginary_axis_pair() {
    // (x^2 + 1)^2
    let result = analyze(&poly(&[1, 0, 2, 0, 1])).unwrap();
    assert!(!result.is_stable());
    assert_eq!(result.non_negative_real_part_root_count(), 0);
    assert!(result.non_negative_real_part_roots().is_empty());
    assert_eq!(
        result.status(),
        &StabilityStatus::Unstable {
            reason: UnstableReason::SymmetricRoots { power: 3 }
        }
    );
    assert_eq!(
        result.routh_array().first_column(),
        vec![
            &finite(1, 1),
            &finite(4, 1),
            &finite(1, 1),
            &finite(2, 1),
            &finite(1, 1)
        ]
    );
}

#[test]
fn test_boundary_polynomials_always_produce_a_result() {
    for coefficients in [
        vec![1, 0, 0, 0, 0, 0, -1],
        vec![1, 0, 0, 0, 0, 0, 0, 0, 1],
        vec![1, 0, 0, 0, 0, 0, 0, 0, -1],
        vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, -1],
        expand(&[complex_pair(0, 2), complex_pair(0, 2), real_root(-1)]),
        expand(&[vec![1, 0], vec![1, 0], complex_pair(-1, 1)]),
    ] {
        let result = analyze(&poly(&coefficients));
        assert!(result.is_ok(), "coefficients {coefficients:?}: {result:?}");
        let result = result.unwrap();
        assert!(!result.is_stable(), "coefficients {coefficients:?}");
        assert!(!result.degeneracies().is_empty(), "coefficients {coefficients:?}");
    }
}
