//! # TVM Options
//!
//! Expiry payoffs of vanilla options and multi-leg strategies.
//!
//! This crate provides:
//!
//! - **Payoffs**: call and put profit at expiry, net of premium
//! - **Strategies**: straddles, bull/bear spreads and butterflies built from legs
//! - **Series**: payoff curves over a spot grid, and breakeven spots
//! - **Plotting** (feature `plot`): SVG payoff diagrams via `plotters`
//!
//! ## Example
//!
//! ```rust
//! use tvm_options::prelude::*;
//!
//! let fly = Strategy::butterfly([45.0, 50.0, 55.0], [4.0, 6.0, 9.0]).unwrap();
//! let points = breakevens(&fly, 0.0, 80.0, 0.25).unwrap();
//!
//! assert_eq!(points, vec![46.0, 54.0]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod payoff;
#[cfg(feature = "plot")]
pub mod plot;
pub mod series;
pub mod strategy;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{OptionsError, OptionsResult};
    pub use crate::payoff::{call_payoff, put_payoff, OptionKind, OptionLeg};
    #[cfg(feature = "plot")]
    pub use crate::plot::{plot_payoff_svg, PlotConfig};
    pub use crate::series::{breakevens, payoff_series, spot_grid, PayoffPoint};
    pub use crate::strategy::{Strategy, StrategyKind};
}

pub use error::{OptionsError, OptionsResult};
