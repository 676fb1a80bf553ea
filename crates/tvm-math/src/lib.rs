//! # TVM Math
//!
//! Numerical routines for the TVM time-value-of-money toolkit.
//!
//! This crate provides:
//!
//! - **Solvers**: Bracketing root-finding by bisection with a fixed
//!   iteration budget and an explicit, tagged outcome ([`RootResult`])
//!
//! ## Design Philosophy
//!
//! - **No silent failures**: A solve never returns a sentinel zero or NaN
//! - **Stateless**: Every call is independent; nothing is cached
//! - **Observable**: Each iteration can be inspected without changing the result

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod solvers;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::solvers::{
        bisection, bisection_with_observer, BisectionSolver, BisectionStep, RootFinder,
        RootResult,
    };
}

pub use error::{MathError, MathResult};
pub use solvers::{bisection, BisectionSolver, RootResult};
