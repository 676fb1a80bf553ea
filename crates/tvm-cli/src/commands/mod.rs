//! CLI command implementations.

pub mod config;
pub mod payment;
pub mod payoff;
pub mod rate;
pub mod value;

// Re-export submodules for convenience
pub use config::ConfigArgs;
pub use payment::PaymentArgs;
pub use payoff::PayoffArgs;
pub use rate::RateArgs;
pub use value::ValueArgs;

use crate::cli::OutputFormat;
use crate::settings::Settings;

/// State shared by every command.
#[derive(Debug)]
pub struct Context {
    /// Resolved output format.
    pub format: OutputFormat,
    /// Decimal places for numeric output.
    pub precision: usize,
    /// Loaded settings.
    pub settings: Settings,
}

impl Context {
    /// Resolves the output format and precision against `settings`.
    pub fn new(format: Option<OutputFormat>, settings: Settings) -> Self {
        Self {
            format: format.unwrap_or_else(|| settings.format()),
            precision: settings.precision(),
            settings,
        }
    }
}
