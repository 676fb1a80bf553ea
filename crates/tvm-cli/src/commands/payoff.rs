//! Payoff command implementation.

#[cfg(feature = "plot")]
use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tvm_options::series::{breakevens, payoff_series, spot_grid, PayoffPoint};
use tvm_options::strategy::StrategyKind;

use super::Context;
use crate::cli::OutputFormat;
#[cfg(feature = "plot")]
use crate::output::print_info;
use crate::output::{format_fixed, print_csv, print_header, print_table, KeyValue};

/// Arguments for the payoff command.
#[derive(Args, Debug)]
pub struct PayoffArgs {
    /// Strategy shape (long-call, long-put, straddle, bull-call-spread,
    /// bear-put-spread, butterfly)
    #[arg(short, long)]
    pub strategy: StrategyKind,

    /// Strikes, comma separated (bear-put-spread takes high,low)
    #[arg(short = 'k', long, value_delimiter = ',', required = true)]
    pub strikes: Vec<f64>,

    /// Premiums per leg, comma separated (default: all zero)
    #[arg(short, long, value_delimiter = ',')]
    pub premiums: Vec<f64>,

    /// First spot price of the grid
    #[arg(long, default_value_t = 0.0)]
    pub start: f64,

    /// End of the grid, exclusive (default: twice the highest strike)
    #[arg(long)]
    pub stop: Option<f64>,

    /// Grid spacing
    #[arg(long, default_value_t = 0.25)]
    pub step: f64,

    /// Write an SVG payoff diagram to this path
    #[cfg(feature = "plot")]
    #[arg(long)]
    pub svg: Option<PathBuf>,
}

/// One grid point for display.
#[derive(Debug, Serialize, Tabled)]
struct PayoffRow {
    #[tabled(rename = "Spot")]
    spot: String,
    #[tabled(rename = "Payoff")]
    payoff: String,
}

#[derive(Debug, Serialize)]
struct PayoffReport<'a> {
    strategy: &'a str,
    net_premium: f64,
    breakevens: &'a [f64],
    series: &'a [PayoffPoint],
}

/// Execute the payoff command.
pub fn execute(args: PayoffArgs, ctx: &Context) -> Result<()> {
    let strategy = args.strategy.build(&args.strikes, &args.premiums)?;
    let stop = args.stop.unwrap_or_else(|| default_stop(&args.strikes));

    let grid = spot_grid(args.start, stop, args.step)?;
    let series = payoff_series(&strategy, &grid);
    let marks = breakevens(&strategy, args.start, stop, args.step)?;
    tracing::info!(
        strategy = strategy.name(),
        points = series.len(),
        breakevens = marks.len(),
        "evaluated payoff"
    );

    #[cfg(feature = "plot")]
    if let Some(path) = &args.svg {
        use tvm_options::plot::{plot_payoff_svg, PlotConfig};

        plot_payoff_svg(&series, &marks, path, &PlotConfig::titled(strategy.name()))?;
        if ctx.format == OutputFormat::Table {
            print_info(&format!("Wrote {}", path.display()));
        }
    }

    let precision = ctx.precision;
    let joined = marks
        .iter()
        .map(|&x| format_fixed(x, precision))
        .collect::<Vec<_>>()
        .join(",");

    match ctx.format {
        OutputFormat::Table => {
            print_header(strategy.name());
            let summary = vec![
                KeyValue::new("Legs", strategy.legs().len().to_string()),
                KeyValue::from_f64("Net Premium", strategy.net_premium(), precision),
                KeyValue::new(
                    "Breakevens",
                    if joined.is_empty() { "none".to_string() } else { joined },
                ),
            ];
            print_table(&summary)?;
            print_table(&rows(&series, precision))?;
        }
        OutputFormat::Json => {
            let report = PayoffReport {
                strategy: strategy.name(),
                net_premium: strategy.net_premium(),
                breakevens: &marks,
                series: &series,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Csv => print_csv(&rows(&series, precision))?,
        OutputFormat::Minimal => println!("{}", joined),
    }

    Ok(())
}

fn rows(series: &[PayoffPoint], precision: usize) -> Vec<PayoffRow> {
    series
        .iter()
        .map(|p| PayoffRow {
            spot: format_fixed(p.spot, precision),
            payoff: format_fixed(p.payoff, precision),
        })
        .collect()
}

fn default_stop(strikes: &[f64]) -> f64 {
    2.0 * strikes.iter().copied().fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stop() {
        assert_eq!(default_stop(&[30.0, 35.0, 40.0]), 80.0);
        assert_eq!(default_stop(&[20.0, 15.0]), 40.0);
    }
}
