//! The heuristic degraded mode used when the formal engine is unavailable.
//!
//! When a call to the extension calculator fails with
//! [`CoreError::FrameworkTooLarge`](crate::CoreError::FrameworkTooLarge), the
//! caller may degrade to the deterministic heuristics of this module, which
//! rely on the caller-declared [`ArgumentStrength`] levels instead of the
//! semantics.
//!
//! Heuristic results are explicitly tagged with
//! [`ValidationMode::Heuristic`]; they must never be presented as formal
//! ones.

use super::{ArgumentStrength, ValidationMode, ValidationResult};
use log::warn;

/// Derives a [`ValidationResult`] from the declared strength of the counter-argument.
///
/// The attack is always considered valid; the original argument survives iff
/// the counter is at most moderate, and the counter succeeds iff it is at
/// least moderate.
pub fn heuristic_validation(counter_strength: ArgumentStrength) -> ValidationResult {
    warn!("using the heuristic validation mode; no formal validation is performed");
    ValidationResult {
        is_valid_attack: true,
        original_survives: counter_strength <= ArgumentStrength::Moderate,
        counter_succeeds: counter_strength >= ArgumentStrength::Moderate,
        logical_consistency: true,
        formal_representation: None,
        grounded_extension: vec![],
        complete_extensions: vec![],
        mode: ValidationMode::Heuristic,
    }
}

/// Derives a strength score from the declared strengths of the counter-arguments.
///
/// For N counter-arguments among which `k` are strong or decisive, the score
/// is `(1 - k/N) * max(0.2, 1 - 0.1*N)`, or 1.0 when N is zero.
pub fn heuristic_strength(counter_strengths: &[ArgumentStrength]) -> f64 {
    if counter_strengths.is_empty() {
        return 1.;
    }
    warn!("using the heuristic strength assessment; no formal assessment is performed");
    let n_counters = counter_strengths.len();
    let n_strong = counter_strengths
        .iter()
        .filter(|s| **s >= ArgumentStrength::Strong)
        .count();
    let strength_factor = 1. - n_strong as f64 / n_counters as f64;
    let count_factor = (1. - 0.1 * n_counters as f64).max(0.2);
    strength_factor * count_factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heuristic_validation_weak_counter() {
        let result = heuristic_validation(ArgumentStrength::Weak);
        assert!(result.is_valid_attack);
        assert!(result.original_survives);
        assert!(!result.counter_succeeds);
        assert!(result.logical_consistency);
        assert_eq!(ValidationMode::Heuristic, result.mode);
        assert!(result.formal_representation.is_none());
    }

    #[test]
    fn test_heuristic_validation_moderate_counter() {
        let result = heuristic_validation(ArgumentStrength::Moderate);
        assert!(result.original_survives);
        assert!(result.counter_succeeds);
    }

    #[test]
    fn test_heuristic_validation_decisive_counter() {
        let result = heuristic_validation(ArgumentStrength::Decisive);
        assert!(!result.original_survives);
        assert!(result.counter_succeeds);
    }

    #[test]
    fn test_heuristic_strength_without_counters() {
        assert_eq!(1., heuristic_strength(&[]));
    }

    #[test]
    fn test_heuristic_strength_single_weak_counter() {
        assert!((heuristic_strength(&[ArgumentStrength::Weak]) - 0.9).abs() < 1e-9);
    }

    #[test]
    fn test_heuristic_strength_single_strong_counter() {
        assert_eq!(0., heuristic_strength(&[ArgumentStrength::Strong]));
    }

    #[test]
    fn test_heuristic_strength_mixed_counters() {
        let score = heuristic_strength(&[
            ArgumentStrength::Weak,
            ArgumentStrength::Moderate,
            ArgumentStrength::Strong,
            ArgumentStrength::Decisive,
        ]);
        // strength_factor = 1 - 2/4, count_factor = 1 - 0.4
        assert!((score - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_heuristic_strength_count_factor_floor() {
        let strengths = vec![ArgumentStrength::Weak; 20];
        assert!((heuristic_strength(&strengths) - 0.2).abs() < 1e-9);
    }
}
