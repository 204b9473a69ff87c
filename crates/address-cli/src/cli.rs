//! CLI argument definitions for address verification.

use std::path::PathBuf;

use address_validate::{AUTH_ID_ENV, AUTH_TOKEN_ENV, DEFAULT_BASE_URL};
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "address-verify",
    version,
    about = "Validate CSV addresses against the Smarty US Street API",
    long_about = "Validate addresses from a CSV file or piped input.\n\n\
                  Input must have exactly the columns Street, City and Zip Code.\n\
                  Usage:\n  \
                  cat addresses.csv | address-verify\n  \
                  address-verify addresses.csv"
)]
pub struct Cli {
    /// CSV file to validate (reads piped stdin when omitted).
    #[arg(value_name = "FILENAME")]
    pub filename: Option<PathBuf>,

    /// Smarty auth id.
    #[arg(long = "auth-id", env = AUTH_ID_ENV, hide_env_values = true)]
    pub auth_id: Option<String>,

    /// Smarty auth token.
    #[arg(long = "auth-token", env = AUTH_TOKEN_ENV, hide_env_values = true)]
    pub auth_token: Option<String>,

    /// US Street API endpoint.
    #[arg(long = "api-url", env = "SMARTY_API_URL", default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

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

    /// Allow address values in trace logs.
    #[arg(long = "log-data")]
    pub log_data: bool,
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
