use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Step through Gregorian calendar weeks.
#[derive(Parser)]
#[command(
    name = "weeks",
    version,
    about = "Step through Gregorian calendar weeks"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Show the week containing a start date, optionally after some moves.
    Show(ShowArgs),
    /// Print the calendar of a year or of one month.
    Year(YearArgs),
}

/// One navigation move applied by `show`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Move {
    /// Following week.
    Next,
    /// Preceding week.
    Prev,
    /// Back to the start week.
    Reset,
}

/// Arguments for the `show` subcommand.
#[derive(clap::Args)]
pub struct ShowArgs {
    /// Path to TOML configuration file (optional).
    #[arg(short, long, default_value = "weeks.toml")]
    pub config: PathBuf,

    /// Start date: "today", yyyy-mm-dd, or e.g. "Mon Jul 10 2023".
    #[arg(short, long)]
    pub start: Option<String>,

    /// Comma-separated moves to apply in order, e.g. next,next,prev,reset.
    #[arg(short, long, value_delimiter = ',')]
    pub moves: Vec<Move>,

    /// Override start-date matching: full-date or day-of-month.
    #[arg(long)]
    pub start_match: Option<String>,

    /// Override output format: text or json.
    #[arg(short, long)]
    pub format: Option<String>,
}

/// Arguments for the `year` subcommand.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Year to print.
    #[arg(allow_negative_numbers = true)]
    pub year: i32,

    /// Only print this month (long or three-letter name).
    #[arg(short, long)]
    pub month: Option<String>,

    /// Path to TOML configuration file (optional).
    #[arg(short, long, default_value = "weeks.toml")]
    pub config: PathBuf,

    /// Override output format: text or json.
    #[arg(short, long)]
    pub format: Option<String>,
}
