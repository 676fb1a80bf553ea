//! CLI argument definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tvm_annuity::annuity::ValueKind;

use crate::commands::{ConfigArgs, PaymentArgs, PayoffArgs, RateArgs, ValueArgs};

/// TVM - Time value of money and option payoff calculator
#[derive(Parser)]
#[command(name = "tvm")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the `default_format` setting)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Settings file to use instead of the per-user one
    #[arg(long = "config", env = "TVM_CONFIG", global = true)]
    pub config_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Accumulated or discounted value of an annuity
    Value(ValueArgs),

    /// Periodic payment needed to reach a value
    Payment(PaymentArgs),

    /// Implied interest rate per period, found by bisection
    Rate(RateArgs),

    /// Payoff diagram of an option strategy at expiry
    Payoff(PayoffArgs),

    /// Manage persisted settings
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}

/// Whether an amount is an accumulated or a discounted value
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    /// Future value at the end of the term
    Accumulated,
    /// Present value at the start of the term
    Discounted,
}

impl From<KindArg> for ValueKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Accumulated => ValueKind::Accumulated,
            KindArg::Discounted => ValueKind::Discounted,
        }
    }
}
