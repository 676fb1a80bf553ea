//! TVM CLI - Command-line interface for time-value-of-money calculations.
//!
//! # Usage
//!
//! ```bash
//! # Accumulated value of 10 payments of 100 at 5%
//! tvm value --payment 100 --rate 0.05 --periods 10 --kind accumulated
//!
//! # Payment that accumulates to 5000 over 36 months at 0.5%
//! tvm payment --value 5000 --rate 0.005 --periods 36
//!
//! # Rate that grows 10 payments of 100 into 1257.79
//! tvm rate --value 1257.79 --payment 100 --periods 10
//!
//! # Butterfly payoff with an SVG diagram
//! tvm payoff --strategy butterfly --strikes 45,50,55 --premiums 4,6,9 --svg fly.svg
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod error;
mod output;
mod settings;

use cli::{Cli, Commands};
use commands::Context;
use settings::Settings;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings = Settings::load(cli.config_file.as_deref())?;
    if !settings.use_colors() {
        colored::control::set_override(false);
    }
    let mut ctx = Context::new(cli.format, settings);
    tracing::debug!(path = %ctx.settings.path().display(), format = ?ctx.format, "loaded settings");

    match cli.command {
        Commands::Value(args) => commands::value::execute(args, &ctx)?,
        Commands::Payment(args) => commands::payment::execute(args, &ctx)?,
        Commands::Rate(args) => commands::rate::execute(args, &ctx)?,
        Commands::Payoff(args) => commands::payoff::execute(args, &ctx)?,
        Commands::Config(args) => commands::config::execute(args, &mut ctx)?,
    }

    Ok(())
}

/// Logs go to stderr so they never mix with command output.
///
/// `RUST_LOG` takes precedence over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| level.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
