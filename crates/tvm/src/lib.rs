//! # TVM
//!
//! Time value of money in one dependency.
//!
//! | Module | Crate | Contents |
//! |--------|-------|----------|
//! | [`math`] | `tvm-math` | Bisection root finding with a tagged [`RootResult`] |
//! | [`annuity`] | `tvm-annuity` | Annuity values, payments and implied rates |
//! | [`options`] | `tvm-options` | Option payoffs, strategies and breakevens |
//!
//! # Example
//!
//! ```rust
//! use tvm::prelude::*;
//!
//! let value = accumulated_value(100.0, 0.05, 10)?;
//! let solved = implied_rate(value, 100.0, 10, ValueKind::Accumulated)?;
//!
//! assert!((solved.rate().unwrap() - 0.05).abs() < 1e-9);
//! # Ok::<(), tvm::annuity::AnnuityError>(())
//! ```

#![warn(missing_docs)]

pub use tvm_annuity as annuity;
pub use tvm_math as math;
pub use tvm_options as options;

pub use tvm_math::{bisection, RootResult};

/// Everything from the member crates' preludes.
pub mod prelude {
    pub use tvm_annuity::prelude::*;
    pub use tvm_math::prelude::*;
    pub use tvm_options::prelude::*;
}
