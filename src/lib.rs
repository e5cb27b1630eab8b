//! mail_dns_check library: SPF, DKIM, and DMARC record checks
//!
//! This library looks up the three mail authentication records a domain can
//! publish in DNS and reports, for each, whether it was found and its raw
//! text:
//! - SPF at the domain apex (`v=spf1`)
//! - DMARC at `_dmarc.<domain>` (`v=DMARC1`)
//! - DKIM at `<selector>._domainkey.<domain>` (`v=DKIM1`)
//!
//! # Example
//!
//! ```no_run
//! use mail_dns_check::{run_check, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     domain: Some("example.com".to_string()),
//!     ..Default::default()
//! };
//!
//! let report = run_check(&config).await?;
//! for result in report.results() {
//!     println!("{}: {}", result.record_type, result.details());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod app;
pub mod check;
pub mod config;
pub mod dns;
pub mod domain;
pub mod error_handling;
pub mod initialization;

// Re-export public API
pub use check::{
    CheckReport, LookupStatus, MatchMode, RecordChecker, RecordLookupResult, RecordType,
};
pub use config::{Config, FailOn, LogFormat, LogLevel, OutputFormat};
pub use dns::TxtResolver;
pub use error_handling::{CheckError, DnsLookupError};
pub use run::run_check;

mod run {
    use crate::check::{check_config, CheckReport};
    use crate::config::Config;
    use crate::error_handling::CheckError;
    use crate::initialization::init_resolver;

    /// Checks the domain named in `config` against the system resolver.
    ///
    /// The domain and the configuration are checked before the resolver is
    /// created, so an input error never touches the network.
    ///
    /// # Errors
    ///
    /// Returns a `CheckError` if the domain is missing or invalid, or a
    /// configuration value fails `Config::validate`. DNS failures are
    /// reported inside the `CheckReport`, never as errors.
    pub async fn run_check(config: &Config) -> Result<CheckReport, CheckError> {
        if config
            .domain
            .as_deref()
            .map_or(true, |d| d.trim().is_empty())
        {
            return Err(CheckError::MissingDomain);
        }
        config.validate()?;
        let resolver = init_resolver(config.lookup_timeout());
        check_config(resolver, config).await
    }
}
