//! Error types for option payoff calculations.

use thiserror::Error;
use tvm_math::MathError;

/// A specialized Result type for option payoff calculations.
pub type OptionsResult<T> = Result<T, OptionsError>;

/// Errors that can occur when building strategies or payoff series.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OptionsError {
    /// Strike that is negative or not finite.
    #[error("Invalid strike: {0}")]
    InvalidStrike(f64),

    /// Leg premium or quantity that is not finite.
    #[error("Invalid leg: {0}")]
    InvalidLeg(String),

    /// Legs that do not form the requested strategy.
    #[error("Invalid strategy: {0}")]
    InvalidStrategy(String),

    /// Unusable spot grid.
    #[error("Invalid spot grid: {0}")]
    InvalidGrid(String),

    /// Drawing the payoff diagram failed.
    #[error("Plot error: {0}")]
    Plot(String),

    /// Error from the numerical layer.
    #[error(transparent)]
    Math(#[from] MathError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(OptionsError::InvalidStrike(-1.0).to_string(), "Invalid strike: -1");
        assert!(OptionsError::InvalidGrid("step must be positive".into())
            .to_string()
            .contains("step must be positive"));
    }
}
