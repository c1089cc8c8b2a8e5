//! CLI argument definitions for the field relationship scanner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use fieldlink_model::options::{DEFAULT_MIN_CONFIDENCE, DEFAULT_MIN_MATCH_COUNT};

#[derive(Parser)]
#[command(
    name = "fieldlink",
    version,
    about = "Discover name-based relationships between configuration tables",
    long_about = "Scan a directory of configuration exports (CSV or XML) and report\n\
                  which name-like columns across different tables refer to the same\n\
                  entities, ranked by confidence. The scan is read-only."
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
    /// Scan a directory of exports and report discovered relationships.
    Scan(ScanArgs),
}

#[derive(Parser)]
pub struct ScanArgs {
    /// Directory containing the exported tables.
    #[arg(value_name = "DATA_DIR")]
    pub data_dir: PathBuf,

    /// Export format to read.
    #[arg(long = "input", value_enum, default_value = "csv")]
    pub input: InputFormatArg,

    /// Drop pairs sharing fewer distinct values than this.
    #[arg(long = "min-match-count", default_value_t = DEFAULT_MIN_MATCH_COUNT)]
    pub min_match_count: usize,

    /// Drop pairs scoring below this confidence.
    #[arg(long = "min-confidence", default_value_t = DEFAULT_MIN_CONFIDENCE)]
    pub min_confidence: f64,

    /// Stop the scan after this many seconds.
    #[arg(long = "timeout-secs", value_name = "SECS")]
    pub timeout_secs: Option<u64>,

    /// Report format.
    #[arg(long = "output", value_enum, default_value = "table")]
    pub output: OutputFormatArg,

    /// Show at most this many relationships in table output.
    #[arg(long = "limit", value_name = "N")]
    pub limit: Option<usize>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum InputFormatArg {
    Csv,
    Xml,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
