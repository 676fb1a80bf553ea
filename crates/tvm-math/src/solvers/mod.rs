//! Root-finding algorithms.
//!
//! This module provides a bracketing bisection solver:
//!
//! - [`bisection`]: Halves a sign-changing bracket a fixed number of times
//! - [`bisection_with_observer`]: Same algorithm, reporting every iteration
//! - [`BisectionSolver`]: A configured solver value implementing [`RootFinder`]
//!
//! Every solve returns a [`RootResult`]. Failures are ordinary variants rather
//! than errors, so a caller can inspect the boundary values of a rejected
//! bracket or the point where the sign check broke down.
//!
//! # Example: Implied Rate
//!
//! ```rust
//! use tvm_math::solvers::{bisection, RootResult};
//!
//! // Rate at which 10 payments of 100 accumulate to 1300
//! let f = |x: f64| ((1.0 + x).powi(10) - 1.0) / x / 13.0 - 1.0;
//!
//! let result = bisection(f, 0.01, 0.99, 50);
//! assert!(matches!(result, RootResult::ApproximateRoot { .. }));
//! assert!(f(result.root().unwrap()).abs() < 1e-10);
//! ```

mod bisection;

pub use bisection::{bisection, bisection_with_observer};

use serde::{Deserialize, Serialize};

use crate::error::{MathError, MathResult};

/// Default iteration budget for [`BisectionSolver`].
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Outcome of a bisection solve.
///
/// The two success variants are kept apart so callers can report whether the
/// root was hit exactly or approximated by the final midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RootResult {
    /// `f(a) * f(b)` is not negative, so no root is guaranteed. No iteration ran.
    NoGuaranteedRoot {
        /// Function value at the lower endpoint.
        fa: f64,
        /// Function value at the upper endpoint.
        fb: f64,
    },

    /// A midpoint evaluated to exactly zero.
    ExactRoot {
        /// The root.
        root: f64,
        /// Iteration that produced the root (1-based).
        iterations: u32,
    },

    /// The iteration budget was exhausted; the root is the final midpoint.
    ApproximateRoot {
        /// Midpoint of the final bracket.
        root: f64,
        /// Iterations performed.
        iterations: u32,
        /// Lower end of the final bracket.
        lower: f64,
        /// Upper end of the final bracket.
        upper: f64,
    },

    /// Neither half of the working bracket showed a sign change.
    DegenerateFailure {
        /// Iteration at which the sign check failed (1-based).
        iteration: u32,
        /// Lower end of the bracket entering that iteration.
        lower: f64,
        /// Upper end of the bracket entering that iteration.
        upper: f64,
        /// Function value at the rejected midpoint.
        f_mid: f64,
    },
}

impl RootResult {
    /// Returns the root for either success variant.
    pub fn root(&self) -> Option<f64> {
        match *self {
            Self::ExactRoot { root, .. } | Self::ApproximateRoot { root, .. } => Some(root),
            Self::NoGuaranteedRoot { .. } | Self::DegenerateFailure { .. } => None,
        }
    }

    /// Returns true when a numeric root was produced.
    pub fn is_converged(&self) -> bool {
        self.root().is_some()
    }

    /// Returns true for an exact hit.
    pub fn is_exact(&self) -> bool {
        matches!(self, Self::ExactRoot { .. })
    }

    /// Number of iterations that ran before the solver returned.
    pub fn iterations(&self) -> u32 {
        match *self {
            Self::NoGuaranteedRoot { .. } => 0,
            Self::ExactRoot { iterations, .. } | Self::ApproximateRoot { iterations, .. } => {
                iterations
            }
            Self::DegenerateFailure { iteration, .. } => iteration,
        }
    }

    /// Short, human-readable name of the outcome.
    pub fn label(&self) -> &'static str {
        match self {
            Self::NoGuaranteedRoot { .. } => "no guaranteed root",
            Self::ExactRoot { .. } => "exact root",
            Self::ApproximateRoot { .. } => "approximate root",
            Self::DegenerateFailure { .. } => "degenerate failure",
        }
    }

    /// Converts the outcome into a `Result`, mapping failures onto [`MathError`].
    pub fn into_result(self) -> MathResult<f64> {
        match self {
            Self::ExactRoot { root, .. } | Self::ApproximateRoot { root, .. } => Ok(root),
            Self::NoGuaranteedRoot { fa, fb } => Err(MathError::InvalidBracket { fa, fb }),
            Self::DegenerateFailure {
                iteration,
                lower,
                upper,
                f_mid,
            } => Err(MathError::DegenerateBracket {
                iteration,
                lower,
                upper,
                f_mid,
            }),
        }
    }
}

/// Snapshot of one completed bisection iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BisectionStep {
    /// Iteration number (1-based).
    pub iteration: u32,
    /// Midpoint evaluated in this iteration.
    pub mid: f64,
    /// Function value at the midpoint.
    pub f_mid: f64,
    /// Lower end of the bracket after the update.
    pub lower: f64,
    /// Upper end of the bracket after the update.
    pub upper: f64,
}

impl BisectionStep {
    /// Width of the bracket after this iteration.
    pub fn width(&self) -> f64 {
        (self.upper - self.lower).abs()
    }
}

/// Trait for bracketing root-finding algorithms.
pub trait RootFinder {
    /// Finds a root of `f` inside `[lower, upper]`.
    fn find_root<F>(&self, f: F, lower: f64, upper: f64) -> RootResult
    where
        F: Fn(f64) -> f64;

    /// Returns the name of the solver.
    fn name(&self) -> &'static str;
}

/// Bisection solver with a fixed iteration budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BisectionSolver {
    /// Number of halving steps to perform.
    pub max_iterations: u32,
}

impl Default for BisectionSolver {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl BisectionSolver {
    /// Creates a solver with the given iteration budget.
    #[must_use]
    pub fn new(max_iterations: u32) -> Self {
        Self { max_iterations }
    }

    /// Sets the iteration budget.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

impl RootFinder for BisectionSolver {
    fn find_root<F>(&self, f: F, lower: f64, upper: f64) -> RootResult
    where
        F: Fn(f64) -> f64,
    {
        bisection(f, lower, upper, self.max_iterations)
    }

    fn name(&self) -> &'static str {
        "Bisection"
    }
}
