//! Shared numeric validators
//!
//! `context` names the object being validated and prefixes the error message.

use crate::error::{ConfigurationError, Result};

/// Check that epsilon is positive and finite and delta lies in `[0, 1]`.
pub fn validate_epsilon_delta(epsilon: f64, delta: f64, context: &'static str) -> Result<()> {
    if !(epsilon.is_finite() && epsilon > 0.0) {
        return Err(ConfigurationError::InvalidEpsilon { context, epsilon });
    }
    if !(0.0..=1.0).contains(&delta) {
        return Err(ConfigurationError::InvalidDelta { context, delta });
    }
    Ok(())
}

/// Check that a partition sampling probability lies in `(0, 1]`.
pub fn validate_sampling_probability(probability: f64) -> Result<()> {
    if probability > 0.0 && probability <= 1.0 {
        Ok(())
    } else {
        Err(ConfigurationError::SamplingProbabilityOutOfRange(probability))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epsilon_must_be_positive() {
        assert!(validate_epsilon_delta(0.1, 0.0, "test").is_ok());
        assert!(matches!(
            validate_epsilon_delta(0.0, 0.0, "test"),
            Err(ConfigurationError::InvalidEpsilon { epsilon, .. }) if epsilon == 0.0
        ));
        assert!(validate_epsilon_delta(-1.0, 0.0, "test").is_err());
        assert!(validate_epsilon_delta(f64::INFINITY, 0.0, "test").is_err());
        assert!(validate_epsilon_delta(f64::NAN, 0.0, "test").is_err());
    }

    #[test]
    fn test_delta_range() {
        assert!(validate_epsilon_delta(1.0, 1e-6, "test").is_ok());
        assert!(validate_epsilon_delta(1.0, 1.0, "AnalysisOptions").is_ok());
        assert!(matches!(
            validate_epsilon_delta(1.0, 1.000_000_1, "test"),
            Err(ConfigurationError::InvalidDelta { .. })
        ));
        assert!(validate_epsilon_delta(1.0, -1e-9, "test").is_err());
        assert!(validate_epsilon_delta(1.0, f64::NAN, "test").is_err());
    }

    #[test]
    fn test_error_names_context() {
        let err = validate_epsilon_delta(-2.0, 0.0, "AnalysisOptions").unwrap_err();
        assert!(err.to_string().starts_with("AnalysisOptions: epsilon"));
    }

    #[test]
    fn test_sampling_probability() {
        assert!(validate_sampling_probability(1.0).is_ok());
        assert!(validate_sampling_probability(0.25).is_ok());
        assert!(validate_sampling_probability(0.0).is_err());
        assert!(validate_sampling_probability(1.5).is_err());
        assert!(validate_sampling_probability(f64::NAN).is_err());
    }
}
