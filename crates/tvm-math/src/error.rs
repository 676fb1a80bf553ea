//! Error types for mathematical operations.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during mathematical operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// The bracket endpoints do not show a sign change.
    #[error("Invalid bracket: f(a) = {fa:.2e} and f(b) = {fb:.2e} do not change sign")]
    InvalidBracket {
        /// Function value at the lower endpoint.
        fa: f64,
        /// Function value at the upper endpoint.
        fb: f64,
    },

    /// Neither half of the working bracket showed a sign change.
    #[error(
        "Bisection failed at iteration {iteration}: no sign change in [{lower}, {upper}] \
         (f(mid) = {f_mid:.2e})"
    )]
    DegenerateBracket {
        /// Iteration at which the check failed.
        iteration: u32,
        /// Lower end of the working bracket.
        lower: f64,
        /// Upper end of the working bracket.
        upper: f64,
        /// Function value at the midpoint.
        f_mid: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::InvalidBracket { fa: 2.0, fb: 7.0 };
        assert!(err.to_string().contains("do not change sign"));

        let err = MathError::DegenerateBracket {
            iteration: 3,
            lower: 0.0,
            upper: 1.0,
            f_mid: 0.5,
        };
        assert!(err.to_string().contains("iteration 3"));
    }
}
