//! CLI argument definitions for the prime list generator.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{ColorChoice, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use primelist_core::Number;
use tracing::level_filters::LevelFilter;

use crate::commands::RunRequest;
use crate::error::{LimitError, RunError};
use crate::layout::{DEFAULT_LIST_DIR, DEFAULT_PRIME_LOG, OutputLayout};
use crate::logging::{LogConfig, LogFormat};
use crate::mode::RunMode;

#[derive(Parser)]
#[command(
    name = "primelist",
    version,
    about = "Write every prime up to a limit to a list file",
    long_about = "Compute every prime number up to LIMIT and save them to a list file.\n\n\
                  The list starts with a `quantity=<N>,last=<L>` header followed by one\n\
                  prime per line. The largest prime is also written to the prime log."
)]
pub struct Cli {
    /// Largest value to test (inclusive). Digits only, greater than zero.
    #[arg(value_name = "LIMIT", value_parser = parse_limit)]
    pub limit: Number,

    /// Append the limit to the output file name.
    #[arg(long = "file-name")]
    pub file_name: bool,

    /// Extend an existing list instead of creating one (not supported).
    #[arg(long = "update")]
    pub update: bool,

    /// Directory that receives the list file.
    #[arg(long = "list-dir", value_name = "DIR", default_value = DEFAULT_LIST_DIR)]
    pub list_dir: PathBuf,

    /// File that receives the largest prime found.
    #[arg(long = "prime-log", value_name = "PATH", default_value = DEFAULT_PRIME_LOG)]
    pub prime_log: PathBuf,

    /// Skip the summary table after a successful run.
    #[arg(long = "no-summary")]
    pub no_summary: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn mode(&self) -> RunMode {
        RunMode::from_flags(self.file_name, self.update)
    }

    pub fn request(&self) -> RunRequest {
        RunRequest {
            limit: self.limit,
            mode: self.mode(),
            layout: OutputLayout::default()
                .with_list_dir(self.list_dir.clone())
                .with_prime_log(self.prime_log.clone()),
        }
    }

    /// Build logging configuration from the flags.
    ///
    /// `--log-level` wins over `-v`/`-q`; either one disables `RUST_LOG`.
    pub fn log_config(&self) -> LogConfig {
        let level_filter = match self.log_level {
            Some(LogLevelArg::Error) => LevelFilter::ERROR,
            Some(LogLevelArg::Warn) => LevelFilter::WARN,
            Some(LogLevelArg::Info) => LevelFilter::INFO,
            Some(LogLevelArg::Debug) => LevelFilter::DEBUG,
            Some(LogLevelArg::Trace) => LevelFilter::TRACE,
            None => self.verbosity.tracing_level_filter(),
        };
        let format = match self.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        };
        let ansi = match self.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => self.log_file.is_none() && io::stderr().is_terminal(),
        };
        let mut config = LogConfig::default()
            .with_level(level_filter)
            .with_format(format)
            .with_ansi(ansi)
            .with_log_file(self.log_file.clone());
        config.use_env_filter = !(self.verbosity.is_present() || self.log_level.is_some());
        config
    }
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

/// Parse the positional limit.
///
/// Only ASCII digits are accepted, so signs, spaces and underscores are
/// rejected even where `u64::from_str` would take them.
pub fn parse_limit(value: &str) -> Result<Number, LimitError> {
    if value.is_empty() {
        return Err(LimitError::Empty);
    }
    if !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LimitError::NotDigits(value.to_string()));
    }
    let limit: Number = value
        .parse()
        .map_err(|_| LimitError::OutOfRange(value.to_string()))?;
    if limit == 0 {
        return Err(LimitError::Zero);
    }
    Ok(limit)
}

/// Map a clap parse failure onto the argument error categories.
///
/// `arg_count` excludes the program name. Only an empty command line counts
/// as missing arguments; a command line with flags but no limit is
/// malformed.
pub fn classify_parse_error(error: &clap::Error, arg_count: usize) -> RunError {
    let message = error
        .kind()
        .as_str()
        .unwrap_or("invalid arguments")
        .to_string();
    match error.kind() {
        ErrorKind::MissingRequiredArgument if arg_count == 0 => {
            RunError::MissingArguments(message)
        }
        _ => RunError::ArgumentFormat(message),
    }
}
