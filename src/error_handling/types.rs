//! Error type definitions.
//!
//! This module defines the error types used throughout the application.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Input errors that stop a check before any DNS query is issued.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    /// No domain was supplied, or it was blank.
    #[error("Please provide a domain name as an argument. Example: mail_dns_check example.com")]
    MissingDomain,

    /// The domain is not a syntactically valid DNS name.
    #[error("Invalid domain '{domain}': {reason}")]
    InvalidDomain {
        /// The rejected input, as supplied
        domain: String,
        /// Why it was rejected
        reason: String,
    },

    /// The DKIM selector is not a syntactically valid DNS label sequence.
    #[error("Invalid DKIM selector '{selector}': {reason}")]
    InvalidSelector {
        /// The rejected selector, as supplied
        selector: String,
        /// Why it was rejected
        reason: String,
    },

    /// A configuration value is out of range.
    #[error(transparent)]
    InvalidConfig(#[from] ConfigValidationError),
}

/// Failure of a single TXT lookup.
///
/// An answer with zero TXT values is not an error; it is returned as an
/// empty vector by the resolver.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DnsLookupError {
    /// The queried name does not exist.
    #[error("NXDOMAIN: name does not exist")]
    NxDomain,

    /// The resolver or the per-lookup timeout gave up waiting.
    #[error("DNS lookup timed out")]
    Timeout,

    /// Any other resolver failure (SERVFAIL, network error, malformed response).
    #[error("DNS resolver error: {0}")]
    Resolver(String),
}

/// A configuration value that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid value for {field}: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// Human-readable explanation, including the accepted range
    pub message: String,
}
