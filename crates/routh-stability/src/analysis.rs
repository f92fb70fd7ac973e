//! The analysis pipeline
//!
//! `seed rows → complete rows (resolving degeneracies) → classify → count
//! sign changes → cross-check roots`. Each call owns its array and returns a
//! fresh [`StabilityResult`]; an analyzer carries configuration only.

use crate::evaluator::{classify, count_sign_changes};
use crate::types::{CrossCheck, StabilityResult};
use num_traits::Signed;
use routh_array::build_routh_array;
use routh_core::{AnalysisConfig, Polynomial, Result, RootLocator};
use routh_roots::{positive_real_part_roots, CompanionMatrixLocator};
use tracing::{debug, instrument, warn};

/// Routh-Hurwitz stability analyzer
#[derive(Debug, Clone)]
pub struct RouthHurwitzAnalyzer<L: RootLocator = CompanionMatrixLocator> {
    config: AnalysisConfig,
    locator: L,
}

impl RouthHurwitzAnalyzer<CompanionMatrixLocator> {
    /// Create an analyzer using the companion-matrix root locator
    pub fn new(config: AnalysisConfig) -> Result<Self> {
        let locator = CompanionMatrixLocator::new(config.root_tolerance, config.max_root_iterations);
        Self::with_locator(config, locator)
    }
}

impl Default for RouthHurwitzAnalyzer<CompanionMatrixLocator> {
    fn default() -> Self {
        Self {
            config: AnalysisConfig::default(),
            locator: CompanionMatrixLocator::default(),
        }
    }
}

impl<L: RootLocator> RouthHurwitzAnalyzer<L> {
    /// Create an analyzer with a custom root locator for the cross-check
    pub fn with_locator(config: AnalysisConfig, locator: L) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, locator })
    }

    /// Configuration in use
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Analyze `polynomial`
    ///
    /// Fails only when the array cannot be completed. A failing root solver
    /// leaves the verdict intact and is recorded as
    /// [`CrossCheck::Unavailable`].
    #[instrument(skip(self, polynomial), fields(polynomial = %polynomial))]
    pub fn analyze(&self, polynomial: &Polynomial) -> Result<StabilityResult> {
        let polynomial = if self.config.normalize_leading_sign
            && polynomial.leading_coefficient().is_negative()
        {
            debug!("negating polynomial with negative leading coefficient");
            polynomial.negated()
        } else {
            polynomial.clone()
        };

        let array = build_routh_array(&polynomial)?;
        let status = classify(&array);
        let sign_changes = count_sign_changes(&array);

        let cross_check = if self.config.cross_check_roots {
            self.cross_check(&polynomial, sign_changes)
        } else {
            CrossCheck::Disabled
        };

        debug!(stable = status.is_stable(), sign_changes, "analysis complete");
        Ok(StabilityResult::new(
            polynomial,
            array,
            status,
            sign_changes,
            cross_check,
        ))
    }

    fn cross_check(&self, polynomial: &Polynomial, sign_changes: usize) -> CrossCheck {
        match positive_real_part_roots(&self.locator, polynomial, self.config.root_precision) {
            Ok(roots) => {
                if roots.len() != sign_changes {
                    warn!(
                        sign_changes,
                        located = roots.len(),
                        method = self.locator.method_name(),
                        "root cross-check disagrees with sign changes; roots may lie on the imaginary axis"
                    );
                }
                CrossCheck::Located(roots)
            }
            Err(err) => {
                warn!(
                    error = %err,
                    method = self.locator.method_name(),
                    "root cross-check unavailable"
                );
                CrossCheck::Unavailable {
                    reason: err.to_string(),
                }
            }
        }
    }
}

/// Analyze `polynomial` with the default configuration
pub fn analyze(polynomial: &Polynomial) -> Result<StabilityResult> {
    RouthHurwitzAnalyzer::default().analyze(polynomial)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_complex::Complex64;
    use routh_core::Error;

    struct FailingLocator;

    impl RootLocator for FailingLocator {
        fn roots(&self, _polynomial: &Polynomial) -> Result<Vec<Complex64>> {
            Err(Error::RootFinding("no convergence".to_string()))
        }

        fn method_name(&self) -> &str {
            "failing"
        }
    }

    fn poly(descending: &[i64]) -> Polynomial {
        Polynomial::from_integers("x", descending).unwrap()
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = AnalysisConfig::default().with_root_precision(99);
        assert!(RouthHurwitzAnalyzer::new(config).is_err());
    }

    #[test]
    fn test_root_failure_keeps_verdict() {
        let analyzer = RouthHurwitzAnalyzer::with_locator(AnalysisConfig::default(), FailingLocator).unwrap();
        let result = analyzer.analyze(&poly(&[1, 0, -3, 2])).unwrap();
        assert!(!result.is_stable());
        assert_eq!(result.non_negative_real_part_root_count(), 2);
        assert_eq!(
            result.cross_check(),
            &CrossCheck::Unavailable {
                reason: "Root finding failed: no convergence".to_string()
            }
        );
        assert!(!result.roots_cross_checked());
        assert!(result.non_negative_real_part_roots().is_empty());
        assert_eq!(result.cross_check_agrees(), None);
    }

    #[test]
    fn test_cross_check_can_be_disabled() {
        let config = AnalysisConfig::default().with_cross_check(false);
        let analyzer = RouthHurwitzAnalyzer::with_locator(config, FailingLocator).unwrap();
        let result = analyzer.analyze(&poly(&[1, 0, -3, 2])).unwrap();
        assert_eq!(result.cross_check(), &CrossCheck::Disabled);
        assert!(result.non_negative_real_part_roots().is_empty());
        assert_eq!(result.non_negative_real_part_root_count(), 2);
        assert_eq!(result.cross_check_agrees(), None);
    }

    #[test]
    fn test_sign_normalization() {
        let raw = analyze(&poly(&[-1, -1])).unwrap();
        assert!(!raw.is_stable());
        assert_eq!(raw.non_negative_real_part_root_count(), 0);

        let analyzer =
            RouthHurwitzAnalyzer::new(AnalysisConfig::default().with_normalized_sign(true)).unwrap();
        let normalized = analyzer.analyze(&poly(&[-1, -1])).unwrap();
        assert!(normalized.is_stable());
        assert_eq!(normalized.polynomial(), &poly(&[1, 1]));
    }
}
