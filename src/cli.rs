use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use moon_phase_lib::config::{OutputFormat, DEFAULT_CONFIG_PATH};

/// Moon phase calculator.
#[derive(Parser)]
#[command(
    name = "moon-phase",
    version,
    about = "Current and historical phases of the Moon"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Override the output format from config.
    #[arg(short, long, global = true, value_enum)]
    pub format: Option<OutputFormat>,

    /// Include the elongation angle in text output.
    #[arg(long, global = true)]
    pub angle: bool,

    /// Leave out the phase symbol in text output.
    #[arg(long, global = true)]
    pub no_symbol: bool,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Phase of the Moon right now.
    Now,
    /// Phase of the Moon at a given date or timestamp.
    At(AtArgs),
    /// Day-by-day phases starting at a date.
    Calendar(CalendarArgs),
    /// Invoke a named tool with JSON arguments.
    Tool(ToolArgs),
}

/// Arguments for the `at` subcommand.
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct AtArgs {
    /// Calendar date (yyyy-MM-dd), read as midnight UTC.
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Seconds since 1970-01-01T00:00Z.
    #[arg(short, long, allow_negative_numbers = true)]
    pub timestamp: Option<f64>,
}

/// Arguments for the `calendar` subcommand.
#[derive(Args)]
pub struct CalendarArgs {
    /// First date listed (yyyy-MM-dd).
    #[arg(long)]
    pub from: NaiveDate,

    /// Number of days to list; defaults to the config value.
    #[arg(short = 'n', long)]
    pub days: Option<u32>,
}

/// Arguments for the `tool` subcommand.
#[derive(Args)]
pub struct ToolArgs {
    /// Tool name, e.g. moon-phase-at-date. Use `list` to show all tools.
    pub name: String,

    /// JSON arguments object, e.g. '{"date":"1982-10-28"}'.
    #[arg(long, default_value = "{}")]
    pub args: String,
}
