use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Directory the report files are written into, relative to the working
/// directory. Created on demand.
pub const REPORT_DIR: &str = ".report";

/// Prefix of every generated report file name.
pub const REPORT_FILE_PREFIX: &str = "assetviz_report_";

/// `chrono` format string for the timestamp embedded in report file names,
/// e.g. `assetviz_report_2026-08-07_14-03-59.html`.
pub const REPORT_TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace). Used with the `--log-level` CLI option.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    Plain,
    Json,
}

/// Command-line options and configuration.
///
/// This struct is automatically generated by `clap` from the field attributes.
///
/// # Examples
///
/// ```bash
/// # Read domains from a file
/// assetviz -f subdomains.txt
///
/// # Or pipe them in
/// subfinder -d example.com | assetviz
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "assetviz",
    about = "Builds an interactive mind-map report from a list of subdomains."
)]
pub struct Config {
    /// File containing domain names, one per line (reads stdin when omitted)
    #[arg(short = 'f', long = "file", value_parser)]
    pub file: Option<PathBuf>,

    /// Directory the HTML report is written into
    #[arg(long, value_parser, default_value = REPORT_DIR)]
    pub report_dir: PathBuf,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}
