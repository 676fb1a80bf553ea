//! # TVM Annuity
//!
//! Time-value-of-money calculations for ordinary simple annuities.
//!
//! This crate provides:
//!
//! - **Closed-form formulas**: accumulated value, discounted value and the
//!   periodic payment needed to reach either
//! - **Implied rate**: the per-period rate that reconciles a target value with
//!   a payment stream, found by bisection
//!
//! Rates are per conversion period and expressed as decimals (`0.05` = 5%).
//!
//! ## Example
//!
//! ```rust
//! use tvm_annuity::prelude::*;
//!
//! let s = accumulated_value(100.0, 0.05, 10).unwrap();
//! let implied = implied_rate(s, 100.0, 10, ValueKind::Accumulated).unwrap();
//!
//! assert!((implied.rate().unwrap() - 0.05).abs() < 1e-10);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::uninlined_format_args)]

pub mod annuity;
pub mod error;
pub mod rate;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::annuity::{accumulated_value, discounted_value, periodic_payment, ValueKind};
    pub use crate::error::{AnnuityError, AnnuityResult};
    pub use crate::rate::{
        implied_rate, implied_rate_with_config, ImpliedRate, ImpliedRateConfig, Reconstruction,
    };
}

pub use error::{AnnuityError, AnnuityResult};
