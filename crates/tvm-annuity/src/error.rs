//! Error types for annuity calculations.

use thiserror::Error;

/// A specialized Result type for annuity calculations.
pub type AnnuityResult<T> = Result<T, AnnuityError>;

/// Errors that can occur during annuity calculations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnnuityError {
    /// Rate outside the domain of `(1 + i)^n`.
    #[error("Invalid rate: {rate} (must be finite and greater than -1)")]
    InvalidRate {
        /// The offending rate.
        rate: f64,
    },

    /// Term without any conversion period.
    #[error("Invalid number of periods: {periods} (must be at least 1)")]
    InvalidPeriods {
        /// The offending period count.
        periods: u32,
    },

    /// Monetary input that cannot be used.
    #[error("Invalid {name}: {value} ({reason})")]
    InvalidAmount {
        /// Name of the input.
        name: &'static str,
        /// The offending value.
        value: f64,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// Solver settings that cannot produce a result.
    #[error("Invalid implied-rate configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Unrecognised value kind.
    #[error("Unknown value kind: {0} (expected 'accumulated' or 'discounted')")]
    UnknownValueKind(String),
}

impl AnnuityError {
    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = AnnuityError::InvalidRate { rate: -1.5 };
        assert!(err.to_string().contains("greater than -1"));

        let err = AnnuityError::UnknownValueKind("future".to_string());
        assert!(err.to_string().contains("future"));
    }
}
