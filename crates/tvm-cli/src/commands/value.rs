//! Value command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tvm_annuity::annuity::ValueKind;

use super::Context;
use crate::cli::KindArg;
use crate::output::{format_fixed, print_report, KeyValue};

/// Arguments for the value command.
#[derive(Args, Debug)]
pub struct ValueArgs {
    /// Payment made at the end of each period
    #[arg(short, long)]
    pub payment: f64,

    /// Interest rate per period as a decimal (0.05 = 5%)
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: f64,

    /// Number of periods
    #[arg(short = 'n', long)]
    pub periods: u32,

    /// Value to compute
    #[arg(short, long, value_enum, default_value = "accumulated")]
    pub kind: KindArg,
}

/// Value calculation result.
#[derive(Debug, Serialize)]
struct ValueReport {
    kind: ValueKind,
    payment: f64,
    rate: f64,
    periods: u32,
    value: f64,
}

/// Execute the value command.
pub fn execute(args: ValueArgs, ctx: &Context) -> Result<()> {
    let kind = ValueKind::from(args.kind);
    let value = kind.value(args.payment, args.rate, args.periods)?;
    tracing::debug!(%kind, value, "computed annuity value");

    let report = ValueReport {
        kind,
        payment: args.payment,
        rate: args.rate,
        periods: args.periods,
        value,
    };
    let rows = vec![
        KeyValue::new("Kind", kind.as_str()),
        KeyValue::from_f64("Payment", args.payment, ctx.precision),
        KeyValue::from_percent("Rate", args.rate),
        KeyValue::new("Periods", args.periods.to_string()),
        KeyValue::from_f64(value_label(kind), value, ctx.precision),
    ];

    print_report(
        "Annuity Value",
        &report,
        &rows,
        &format_fixed(value, ctx.precision),
        ctx.format,
    )
}

pub(crate) fn value_label(kind: ValueKind) -> &'static str {
    match kind {
        ValueKind::Accumulated => "Accumulated Value",
        ValueKind::Discounted => "Discounted Value",
    }
}
