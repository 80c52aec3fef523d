//! # Moon Phase Application Entry Point
//!
//! This binary crate wires the library to the command line: it parses
//! arguments, loads presentation settings, computes phases and prints them as
//! text or JSON. All astronomy lives in `moon_phase_lib`.

// Test modules
#[cfg(test)]
mod tests;

mod cli;

use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use moon_phase_lib::{config::Config, renderer, tools, Instant, MoonPhaseEngine};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use crate::cli::{AtArgs, CalendarArgs, Cli, Command, ToolArgs};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

/// Crate targets that should receive log output.
const CRATE_TARGETS: &[&str] = &["moon_phase", "moon_phase_lib"];

/// Filter directives for a CLI verbosity level.
///
/// 0 -> warn, 1 (-v) -> info, 2 (-vv) -> debug, 3+ (-vvv) -> trace.
fn default_filter(verbosity: u8) -> String {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    CRATE_TARGETS
        .iter()
        .map(|t| format!("{t}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the stderr subscriber. `RUST_LOG` overrides the CLI flag if set.
fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Merge the config file with command line overrides.
fn effective_config(cli: &Cli) -> Config {
    let mut config = Config::load_from_path(&cli.config);
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if cli.angle {
        config.output.show_angle = true;
    }
    if cli.no_symbol {
        config.output.show_symbol = false;
    }
    debug!(?config, "effective configuration");
    config
}

fn run(cli: Cli) -> Result<()> {
    let config = effective_config(&cli);
    let engine = MoonPhaseEngine::new();

    let output = match cli.command {
        Command::Now => {
            let reading = engine
                .reading_at(Instant::now())
                .context("computing current moon phase")?;
            renderer::render_reading(&reading, &config.output)?
        }
        Command::At(args) => {
            let instant = resolve_instant(&args)?;
            let reading = engine
                .reading_at(instant)
                .context("computing moon phase")?;
            renderer::render_reading(&reading, &config.output)?
        }
        Command::Calendar(CalendarArgs { from, days }) => {
            let days = days.unwrap_or(config.calendar.days);
            let rows = engine
                .calendar(from, days)
                .with_context(|| format!("computing {days} days of phases from {from}"))?;
            renderer::render_calendar(&rows, &config.output)?
        }
        Command::Tool(args) => run_tool(&engine, &args)?,
    };

    println!("{}", output.trim_end());
    Ok(())
}

fn resolve_instant(args: &AtArgs) -> Result<Instant> {
    match (args.date, args.timestamp) {
        (Some(date), _) => Ok(Instant::from_date(date)),
        (None, Some(seconds)) => {
            Instant::from_unix_seconds(seconds).context("invalid --timestamp")
        }
        (None, None) => anyhow::bail!("either --date or --timestamp is required"),
    }
}

fn run_tool(engine: &MoonPhaseEngine, args: &ToolArgs) -> Result<String> {
    if args.name == "list" {
        return Ok(serde_json::to_string_pretty(&tools::list_tools())?);
    }
    let arguments: serde_json::Value =
        serde_json::from_str(&args.args).context("--args is not valid JSON")?;
    let result = tools::call_tool(engine, &args.name, arguments)
        .with_context(|| format!("tool {} failed", args.name))?;
    Ok(serde_json::to_string(&result)?)
}
