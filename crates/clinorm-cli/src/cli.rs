//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "clinorm",
    version,
    about = "Normalize free-text clinical weights and heights",
    long_about = "Normalize hand-typed clinical measurements.\n\n\
                  Weights are converted to pounds (kg, lb, stone, jin, kan, arroba).\n\
                  Heights are converted to feet and inches (composite, metric, inches,\n\
                  decimal feet, or bare numbers inferred by magnitude)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
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

    /// Allow raw measurement values in log output.
    ///
    /// Measurements are patient data; they are redacted by default.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize a single weight and/or height.
    Convert(ConvertArgs),

    /// Normalize weight and height columns of a CSV file.
    Batch(BatchArgs),

    /// Prompt for measurements until 'q' is entered.
    Interactive,

    /// List the accepted unit vocabulary.
    Units,
}

#[derive(Parser)]
pub struct ConvertArgs {
    /// Weight text, e.g. "70kg", "11st 6", "100斤".
    #[arg(long, short = 'w', value_name = "WEIGHT")]
    pub weight: Option<String>,

    /// Height text, e.g. "5'11", "180cm", "1.8".
    #[arg(long = "height", short = 'H', value_name = "HEIGHT")]
    pub height: Option<String>,

    /// Weight above which a warning is logged, in pounds.
    #[arg(long = "max-weight", value_name = "LBS", default_value_t = 1500.0)]
    pub max_weight: f64,

    /// Print a JSON object instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser)]
pub struct BatchArgs {
    /// Input CSV file with a header row.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output CSV file (default: stdout).
    #[arg(long, short = 'o', value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Header of the weight column.
    #[arg(long = "weight-column", default_value = "weight")]
    pub weight_column: String,

    /// Header of the height column.
    #[arg(long = "height-column", default_value = "height")]
    pub height_column: String,

    /// Do not normalize weights.
    #[arg(long = "no-weight", conflicts_with = "no_height")]
    pub no_weight: bool,

    /// Do not normalize heights.
    #[arg(long = "no-height")]
    pub no_height: bool,

    /// Weight above which a warning is logged, in pounds.
    #[arg(long = "max-weight", value_name = "LBS", default_value_t = 1500.0)]
    pub max_weight: f64,
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
