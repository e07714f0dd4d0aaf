//! Core projection engine for SIP future-value calculations

use thiserror::Error;

use super::input::ProjectionInput;
use super::result::ProjectionResult;

/// Validation failure for a projection input
///
/// The only error kind the engine produces. Each variant carries the
/// offending value; retrying with the same input yields the same failure.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ValidationError {
    #[error("periodic contribution must be a positive finite amount, got {0}")]
    Contribution(f64),

    #[error("periodic rate must be a positive finite fraction, got {0}")]
    Rate(f64),

    #[error("period count must be a positive finite number, got {0}")]
    PeriodCount(f64),
}

/// Future-value engine for fixed periodic contribution streams
///
/// Stateless and side-effect free: identical inputs produce bit-identical
/// outputs, and concurrent calls need no coordination.
pub struct ProjectionEngine;

impl ProjectionEngine {
    /// Compute the future value of a contribution stream
    ///
    /// Annuity-due compounding: each installment grows for its remaining
    /// tenure and the final period's growth factor is applied uniformly.
    ///
    /// Given contribution `P`, per-period rate `r` and period count `n`:
    ///
    /// ```text
    /// projected_value = P * (((1 + r)^n - 1) / r) * (1 + r)
    /// ```
    ///
    /// No rounding is applied here. A zero rate is rejected rather than
    /// reduced to the limiting case `projected_value = total_contributed`;
    /// callers must treat it as a validation failure upstream.
    pub fn compute(input: &ProjectionInput) -> Result<ProjectionResult, ValidationError> {
        Self::validate(input)?;

        let p = input.periodic_contribution;
        let r = input.periodic_rate;
        let n = input.period_count;

        let projected_value = p * (((1.0 + r).powf(n) - 1.0) / r) * (1.0 + r);
        let total_contributed = p * n;

        Ok(ProjectionResult {
            total_contributed,
            projected_value,
            net_gain: projected_value - total_contributed,
        })
    }

    /// Check that every input is finite and strictly positive
    fn validate(input: &ProjectionInput) -> Result<(), ValidationError> {
        let ProjectionInput {
            periodic_contribution,
            periodic_rate,
            period_count,
        } = *input;

        if !periodic_contribution.is_finite() || periodic_contribution <= 0.0 {
            return Err(ValidationError::Contribution(periodic_contribution));
        }
        if !periodic_rate.is_finite() || periodic_rate <= 0.0 {
            return Err(ValidationError::Rate(periodic_rate));
        }
        if !period_count.is_finite() || period_count <= 0.0 {
            return Err(ValidationError::PeriodCount(period_count));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_ten_year_sip() {
        // 5000/month at 1% monthly over 120 months
        let input = ProjectionInput::new(5000.0, 0.01, 120.0);
        let result = ProjectionEngine::compute(&input).unwrap();

        assert_eq!(result.total_contributed, 600_000.0);
        assert_relative_eq!(result.projected_value, 1_161_695.0, max_relative = 1e-5);
        assert_relative_eq!(result.net_gain, 561_695.0, max_relative = 1e-5);
    }

    #[test]
    fn test_one_year_sip() {
        let input = ProjectionInput::new(1000.0, 0.01, 12.0);
        let result = ProjectionEngine::compute(&input).unwrap();

        assert_eq!(result.total_contributed, 12_000.0);
        assert_relative_eq!(result.projected_value, 12_809.0, max_relative = 1e-4);
        assert_relative_eq!(result.net_gain, 809.0, max_relative = 2e-3);
    }

    #[test]
    fn test_single_period() {
        // One installment at 10%: 10000 * ((1.1 - 1) / 0.1) * 1.1 = 11000
        let input = ProjectionInput::new(10_000.0, 0.1, 1.0);
        let result = ProjectionEngine::compute(&input).unwrap();

        assert_eq!(result.total_contributed, 10_000.0);
        assert_relative_eq!(result.projected_value, 11_000.0, max_relative = 1e-12);
        assert_relative_eq!(result.net_gain, 1_000.0, max_relative = 1e-9);
    }

    #[test]
    fn test_total_contributed_exact() {
        let input = ProjectionInput::new(2500.0, 0.007, 36.0);
        let result = ProjectionEngine::compute(&input).unwrap();

        assert_eq!(result.total_contributed, 2500.0 * 36.0);
        assert_eq!(result.net_gain, result.projected_value - result.total_contributed);
    }

    #[test]
    fn test_gain_is_positive() {
        let input = ProjectionInput::new(100.0, 0.005, 60.0);
        let result = ProjectionEngine::compute(&input).unwrap();

        assert!(result.projected_value >= result.total_contributed);
        assert!(result.net_gain > 0.0);
    }

    #[test]
    fn test_idempotent() {
        let input = ProjectionInput::new(5000.0, 0.01, 120.0);
        let first = ProjectionEngine::compute(&input).unwrap();
        let second = ProjectionEngine::compute(&input).unwrap();

        // Bit-identical, not merely close
        assert_eq!(first.projected_value.to_bits(), second.projected_value.to_bits());
        assert_eq!(first.net_gain.to_bits(), second.net_gain.to_bits());
    }

    #[test]
    fn test_zero_inputs_rejected() {
        assert_eq!(
            ProjectionEngine::compute(&ProjectionInput::new(0.0, 0.01, 120.0)),
            Err(ValidationError::Contribution(0.0))
        );
        assert_eq!(
            ProjectionEngine::compute(&ProjectionInput::new(5000.0, 0.0, 120.0)),
            Err(ValidationError::Rate(0.0))
        );
        assert_eq!(
            ProjectionEngine::compute(&ProjectionInput::new(5000.0, 0.01, 0.0)),
            Err(ValidationError::PeriodCount(0.0))
        );
    }

    #[test]
    fn test_zero_rate_never_divides() {
        // Rate precondition violated: validation failure, not a div-by-zero result
        let input = ProjectionInput::new(5000.0, 0.0, 10.0);
        assert_eq!(
            ProjectionEngine::compute(&input),
            Err(ValidationError::Rate(0.0))
        );
    }

    #[test]
    fn test_negative_inputs_rejected() {
        assert!(ProjectionEngine::compute(&ProjectionInput::new(-1.0, 0.01, 12.0)).is_err());
        assert!(ProjectionEngine::compute(&ProjectionInput::new(1000.0, -0.01, 12.0)).is_err());
        assert!(ProjectionEngine::compute(&ProjectionInput::new(1000.0, 0.01, -12.0)).is_err());
    }

    #[test]
    fn test_non_finite_inputs_rejected() {
        // NaN typically arrives from a failed text-to-number conversion upstream
        assert!(ProjectionEngine::compute(&ProjectionInput::new(f64::NAN, 0.01, 12.0)).is_err());
        assert!(ProjectionEngine::compute(&ProjectionInput::new(1000.0, f64::NAN, 12.0)).is_err());
        assert!(ProjectionEngine::compute(&ProjectionInput::new(1000.0, 0.01, f64::NAN)).is_err());
        assert!(
            ProjectionEngine::compute(&ProjectionInput::new(f64::INFINITY, 0.01, 12.0)).is_err()
        );
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::Rate(-0.5);
        assert!(err.to_string().contains("-0.5"));
    }
}
