//! The record checker.

use std::time::Duration;

use log::{debug, info, warn};

use super::classify::classify;
use super::types::{CheckReport, MatchMode, RecordLookupResult, RecordType};
use crate::config::{Config, DEFAULT_DKIM_SELECTOR, LOOKUP_TIMEOUT};
use crate::dns::TxtResolver;
use crate::domain::{
    check_query_name, dkim_query_name, dmarc_query_name, spf_query_name, validate_domain,
    validate_selector,
};
use crate::error_handling::{CheckError, DnsLookupError};

/// Looks up SPF, DMARC, and DKIM records for a domain.
///
/// Each check issues exactly three TXT queries, concurrently, each bounded by
/// its own timeout. A failed lookup only affects its own record type.
///
/// # Examples
///
/// ```no_run
/// use mail_dns_check::initialization::init_resolver;
/// use mail_dns_check::RecordChecker;
/// use std::time::Duration;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let resolver = init_resolver(Duration::from_secs(3));
/// let checker = RecordChecker::new(resolver);
/// let report = checker.check("example.com", None).await?;
/// println!("SPF found: {}", report.spf().found);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RecordChecker<R> {
    resolver: R,
    default_selector: String,
    match_mode: MatchMode,
    lookup_timeout: Duration,
}

impl<R: TxtResolver> RecordChecker<R> {
    /// Creates a checker with the `default` selector, contains-matching, and
    /// the standard per-lookup timeout.
    pub fn new(resolver: R) -> Self {
        Self {
            resolver,
            default_selector: DEFAULT_DKIM_SELECTOR.to_string(),
            match_mode: MatchMode::Contains,
            lookup_timeout: LOOKUP_TIMEOUT,
        }
    }

    /// Creates a checker using the selector, match mode, and timeout from `config`.
    pub fn from_config(resolver: R, config: &Config) -> Self {
        Self::new(resolver)
            .with_default_selector(config.dkim_selector.clone())
            .with_match_mode(config.match_mode)
            .with_lookup_timeout(config.lookup_timeout())
    }

    /// Selector used when `check` is called without one.
    ///
    /// The selector is validated when a check runs.
    pub fn with_default_selector(mut self, selector: impl Into<String>) -> Self {
        self.default_selector = selector.into();
        self
    }

    pub fn with_match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = timeout;
        self
    }

    pub fn default_selector(&self) -> &str {
        &self.default_selector
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    pub fn lookup_timeout(&self) -> Duration {
        self.lookup_timeout
    }

    /// Checks `domain` for SPF, DMARC, and DKIM records.
    ///
    /// `selector` overrides the checker's default DKIM selector for this call.
    ///
    /// # Errors
    ///
    /// Returns a `CheckError` if the domain is blank or invalid, or the
    /// selector is invalid. No DNS query is issued in that case. DNS failures
    /// are never returned as errors; they appear in the report as not-found
    /// results.
    pub async fn check(
        &self,
        domain: &str,
        selector: Option<&str>,
    ) -> Result<CheckReport, CheckError> {
        let input_domain = domain;
        let input_selector = selector.unwrap_or(self.default_selector.as_str());
        let domain = validate_domain(input_domain)?;
        let selector = validate_selector(input_selector)?;

        let spf_name = spf_query_name(&domain);
        let dmarc_name = dmarc_query_name(&domain);
        let dkim_name = dkim_query_name(&selector, &domain);

        check_query_name(&dmarc_name).map_err(|reason| CheckError::InvalidDomain {
            domain: input_domain.to_string(),
            reason: format!("DMARC {reason}"),
        })?;
        check_query_name(&dkim_name).map_err(|reason| CheckError::InvalidSelector {
            selector: input_selector.to_string(),
            reason: format!("DKIM {reason}"),
        })?;

        info!("Checking SPF, DMARC, and DKIM (selector '{selector}') for {domain}");

        let (spf, dmarc, dkim) = tokio::join!(
            self.lookup(RecordType::Spf, &spf_name),
            self.lookup(RecordType::Dmarc, &dmarc_name),
            self.lookup(RecordType::Dkim, &dkim_name)
        );

        Ok(CheckReport::new(
            domain,
            selector,
            self.match_mode,
            spf,
            dmarc,
            dkim,
        ))
    }

    async fn lookup(&self, record_type: RecordType, name: &str) -> RecordLookupResult {
        let answer =
            match tokio::time::timeout(self.lookup_timeout, self.resolver.lookup_txt(name)).await
            {
                Ok(answer) => answer,
                Err(_) => {
                    warn!(
                        "{record_type} lookup for {name} timed out after {}ms",
                        self.lookup_timeout.as_millis()
                    );
                    Err(DnsLookupError::Timeout)
                }
            };

        let result = classify(record_type, name, answer, self.match_mode);
        if result.found {
            debug!("{record_type} record found at {name}");
        } else {
            info!("{record_type} record not found at {name}: {}", result.status);
        }
        result
    }
}

/// Checks the domain named in `config`.
///
/// # Errors
///
/// Returns `CheckError::MissingDomain` if `config.domain` is `None`, or any
/// other input error from [`RecordChecker::check`].
pub async fn check_config<R: TxtResolver>(
    resolver: R,
    config: &Config,
) -> Result<CheckReport, CheckError> {
    let domain = config.domain.as_deref().ok_or(CheckError::MissingDomain)?;
    RecordChecker::from_config(resolver, config)
        .check(domain, None)
        .await
}
