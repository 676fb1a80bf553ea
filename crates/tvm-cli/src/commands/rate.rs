//! Rate command implementation.
//!
//! Solves for the per-period rate that makes the annuity formula reproduce
//! a target value. The bracket and step count come from the flags, then
//! the persisted settings, then the library defaults.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tvm_annuity::annuity::ValueKind;
use tvm_annuity::rate::{implied_rate_with_config, ImpliedRate, ImpliedRateConfig};

use super::value::value_label;
use super::Context;
use crate::cli::KindArg;
use crate::error::CliError;
use crate::output::{format_fixed, print_report, KeyValue};

/// Arguments for the rate command.
#[derive(Args, Debug)]
pub struct RateArgs {
    /// Target accumulated or discounted value
    #[arg(long)]
    pub value: f64,

    /// Payment made at the end of each period
    #[arg(short, long)]
    pub payment: f64,

    /// Number of periods
    #[arg(short = 'n', long)]
    pub periods: u32,

    /// Kind of the target value
    #[arg(short, long, value_enum, default_value = "accumulated")]
    pub kind: KindArg,

    /// Lower end of the search bracket
    #[arg(long, allow_negative_numbers = true)]
    pub lower: Option<f64>,

    /// Upper end of the search bracket
    #[arg(long, allow_negative_numbers = true)]
    pub upper: Option<f64>,

    /// Maximum bisection steps
    #[arg(long)]
    pub iterations: Option<u32>,
}

#[derive(Debug, Serialize)]
struct RateReport {
    payment: f64,
    periods: u32,
    lower: f64,
    upper: f64,
    max_iterations: u32,
    #[serde(flatten)]
    result: ImpliedRate,
}

/// Execute the rate command.
///
/// Fails after printing the report when the bracket holds no rate.
pub fn execute(args: RateArgs, ctx: &Context) -> Result<()> {
    let kind = ValueKind::from(args.kind);
    let config = ImpliedRateConfig::new(
        args.lower.unwrap_or_else(|| ctx.settings.rate_lower()),
        args.upper.unwrap_or_else(|| ctx.settings.rate_upper()),
        args.iterations.unwrap_or_else(|| ctx.settings.max_iterations()),
    );
    tracing::debug!(
        lower = config.lower,
        upper = config.upper,
        max_iterations = config.max_iterations,
        "solving implied rate"
    );

    let result = implied_rate_with_config(args.value, args.payment, args.periods, kind, &config)?;

    let mut rows = vec![
        KeyValue::from_f64(value_label(kind), args.value, ctx.precision),
        KeyValue::from_f64("Payment", args.payment, ctx.precision),
        KeyValue::new("Periods", args.periods.to_string()),
        KeyValue::new(
            "Bracket",
            format!(
                "[{}, {}]",
                format_fixed(config.lower, ctx.precision),
                format_fixed(config.upper, ctx.precision)
            ),
        ),
        KeyValue::new("Outcome", result.outcome.label()),
        KeyValue::new("Iterations", result.outcome.iterations().to_string()),
    ];
    if let Some(check) = result.reconstruction {
        rows.push(KeyValue::from_f64("Rate", check.rate, ctx.precision));
        rows.push(KeyValue::from_percent("Rate (%)", check.rate));
        rows.push(KeyValue::from_f64("Recomputed Value", check.value, ctx.precision));
        rows.push(KeyValue::new("Error", format!("{:.3e}", check.error)));
    }

    let minimal = result
        .rate()
        .map(|rate| format_fixed(rate, ctx.precision))
        .unwrap_or_default();
    let label = result.outcome.label();
    let converged = result.is_converged();

    let report = RateReport {
        payment: args.payment,
        periods: args.periods,
        lower: config.lower,
        upper: config.upper,
        max_iterations: config.max_iterations,
        result,
    };
    print_report("Implied Rate", &report, &rows, &minimal, ctx.format)?;

    if !converged {
        return Err(CliError::NoImpliedRate(label.to_string()).into());
    }
    Ok(())
}
