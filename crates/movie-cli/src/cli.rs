//! CLI argument definitions for the movie dataset tool.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "movies",
    version,
    about = "Movie dataset tool - clean raw movie metadata and query it",
    long_about = "Clean a raw movie metadata CSV into a canonical dataset and run\n\
                  analytic queries over it (release month/weekday counts, franchise,\n\
                  country and company aggregates, per-title return)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize a raw movie CSV and publish the cleaned dataset.
    Normalize(NormalizeArgs),

    /// Run an analytic query against a cleaned dataset.
    Query(QueryArgs),

    /// List the localized month labels accepted by `query month`.
    Months,

    /// List the localized weekday labels accepted by `query weekday`.
    Weekdays,
}

#[derive(Parser)]
pub struct NormalizeArgs {
    /// Raw movie metadata CSV.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Cleaned dataset path (default: <INPUT_DIR>/cleaned_dataset.csv).
    #[arg(long = "output", short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Normalize and report without writing the cleaned dataset.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Additional column to discard (repeatable).
    #[arg(long = "drop-column", value_name = "NAME")]
    pub drop_columns: Vec<String>,

    /// Keep a column that is discarded by default (repeatable).
    #[arg(long = "keep-column", value_name = "NAME")]
    pub keep_columns: Vec<String>,

    /// Print the report as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct QueryArgs {
    /// Cleaned dataset produced by `normalize`.
    #[arg(long = "dataset", short = 'd', value_name = "PATH")]
    pub dataset: PathBuf,

    /// Print the result as JSON instead of a table.
    #[arg(long = "json", global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub query: QueryCommand,
}

#[derive(Subcommand)]
pub enum QueryCommand {
    /// Movies released in a month (Spanish name, e.g. "Enero").
    Month(KeyArg),

    /// Movies released on a weekday (Spanish name, e.g. "Lunes").
    Weekday(KeyArg),

    /// Movie count, total and average revenue of a franchise.
    Franchise(KeyArg),

    /// Movies produced in a country.
    Country(KeyArg),

    /// Total revenue and movie count of a production company.
    Company(KeyArg),

    /// Budget, revenue, return and release year of a title.
    Return(KeyArg),
}

#[derive(Args)]
pub struct KeyArg {
    #[arg(value_name = "NAME")]
    pub name: String,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
