//! Payment command implementation.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tvm_annuity::annuity::{periodic_payment, ValueKind};

use super::value::value_label;
use super::Context;
use crate::cli::KindArg;
use crate::output::{format_fixed, print_report, KeyValue};

/// Arguments for the payment command.
#[derive(Args, Debug)]
pub struct PaymentArgs {
    /// Target accumulated or discounted value
    #[arg(long)]
    pub value: f64,

    /// Interest rate per period as a decimal (0.05 = 5%)
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: f64,

    /// Number of periods
    #[arg(short = 'n', long)]
    pub periods: u32,

    /// Kind of the target value
    #[arg(short, long, value_enum, default_value = "accumulated")]
    pub kind: KindArg,
}

#[derive(Debug, Serialize)]
struct PaymentReport {
    kind: ValueKind,
    value: f64,
    rate: f64,
    periods: u32,
    payment: f64,
}

/// Execute the payment command.
pub fn execute(args: PaymentArgs, ctx: &Context) -> Result<()> {
    let kind = ValueKind::from(args.kind);
    let payment = periodic_payment(args.value, args.rate, args.periods, kind)?;

    let report = PaymentReport {
        kind,
        value: args.value,
        rate: args.rate,
        periods: args.periods,
        payment,
    };
    let rows = vec![
        KeyValue::from_f64(value_label(kind), args.value, ctx.precision),
        KeyValue::from_percent("Rate", args.rate),
        KeyValue::new("Periods", args.periods.to_string()),
        KeyValue::from_f64("Payment", payment, ctx.precision),
    ];

    print_report(
        "Periodic Payment",
        &report,
        &rows,
        &format_fixed(payment, ctx.precision),
        ctx.format,
    )
}
