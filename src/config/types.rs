//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::check::MatchMode;
use crate::config::constants::{
    DEFAULT_DKIM_SELECTOR, DNS_TIMEOUT_SECS, MAX_LOOKUP_TIMEOUT_SECS,
};
use crate::error_handling::ConfigValidationError;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
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
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// How the check report is written to stdout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Three-row table with found/not-found badges
    Table,
    /// The serialized report as pretty-printed JSON
    Json,
}

/// Exit code policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum FailOn {
    /// Always exit 0 once a report was produced
    Never,
    /// Exit 2 if any of SPF, DMARC, or DKIM is missing
    AnyMissing,
}

/// Application configuration.
///
/// Parsed from the command line by the binary, or constructed programmatically
/// with `..Default::default()` by library users.
///
/// # Examples
///
/// ```bash
/// # Check the apex SPF, DMARC, and the `default` DKIM selector
/// mail_dns_check example.com
///
/// # Use a different selector and fail in CI if anything is missing
/// mail_dns_check example.com --dkim-selector google --fail-on any-missing
///
/// # Machine-readable output
/// mail_dns_check example.com --format json
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mail_dns_check",
    about = "Checks a domain for published SPF, DKIM, and DMARC records."
)]
pub struct Config {
    /// Domain to check (e.g. example.com)
    pub domain: Option<String>,

    /// DKIM selector queried at `<selector>._domainkey.<domain>`
    #[arg(long, default_value = DEFAULT_DKIM_SELECTOR)]
    pub dkim_selector: String,

    /// Marker matching: contains (anywhere in the value) or prefix (value starts with it)
    #[arg(long, value_enum, default_value_t = MatchMode::Contains)]
    pub match_mode: MatchMode,

    /// Timeout for each of the three TXT lookups, in seconds
    #[arg(long, default_value_t = DNS_TIMEOUT_SECS)]
    pub lookup_timeout_secs: u64,

    /// Output format: table|json
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Exit code policy: never|any-missing
    #[arg(long, value_enum, default_value_t = FailOn::Never)]
    pub fail_on: FailOn,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            domain: None,
            dkim_selector: DEFAULT_DKIM_SELECTOR.to_string(),
            match_mode: MatchMode::Contains,
            lookup_timeout_secs: DNS_TIMEOUT_SECS,
            format: OutputFormat::Table,
            fail_on: FailOn::Never,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

impl Config {
    /// Per-lookup timeout as a `Duration`.
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_secs(self.lookup_timeout_secs)
    }

    /// Validates option values that clap cannot check on its own.
    ///
    /// The domain itself is not checked here: a missing or malformed domain is
    /// an input error reported by the checker.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigValidationError` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.lookup_timeout_secs == 0 {
            return Err(ConfigValidationError {
                field: "lookup_timeout_secs",
                message: "Lookup timeout must be greater than 0 seconds".to_string(),
            });
        }
        if self.lookup_timeout_secs > MAX_LOOKUP_TIMEOUT_SECS {
            return Err(ConfigValidationError {
                field: "lookup_timeout_secs",
                message: format!(
                    "Lookup timeout must be at most {MAX_LOOKUP_TIMEOUT_SECS} seconds"
                ),
            });
        }
        if let Err(e) = crate::domain::validate_selector(&self.dkim_selector) {
            return Err(ConfigValidationError {
                field: "dkim_selector",
                message: e.to_string(),
            });
        }
        Ok(())
    }
}
