//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including record markers, timeouts, and DNS name limits.

use std::time::Duration;

/// DKIM selector used when the caller does not supply one.
pub const DEFAULT_DKIM_SELECTOR: &str = "default";

// Record markers
/// Marker that identifies an SPF record in a TXT value
pub const SPF_MARKER: &str = "v=spf1";
/// Marker that identifies a DMARC record in a TXT value
pub const DMARC_MARKER: &str = "v=DMARC1";
/// Marker that identifies a DKIM key record in a TXT value
pub const DKIM_MARKER: &str = "v=DKIM1";

// Query name construction
/// Label prepended to the domain for DMARC lookups
pub const DMARC_LABEL: &str = "_dmarc";
/// Label inserted between selector and domain for DKIM lookups
pub const DKIM_LABEL: &str = "_domainkey";

// Network operation timeouts
/// Per-lookup timeout in seconds
/// Most TXT queries complete in well under a second; 3s fails fast on hung resolvers
pub const DNS_TIMEOUT_SECS: u64 = 3;
/// Per-lookup timeout applied around each TXT query
pub const LOOKUP_TIMEOUT: Duration = Duration::from_secs(DNS_TIMEOUT_SECS);
/// Upper bound accepted for `--lookup-timeout-secs`
pub const MAX_LOOKUP_TIMEOUT_SECS: u64 = 30;

// DNS name limits (RFC 1035)
/// Maximum length of a single label
pub const MAX_LABEL_LENGTH: usize = 63;
/// Maximum length of a full domain name in presentation format, without the root dot
pub const MAX_DOMAIN_LENGTH: usize = 253;

// Exit codes
/// Exit code for input, configuration, or initialization errors
pub const EXIT_CODE_ERROR: i32 = 1;
/// Exit code when `--fail-on` triggers on missing records
pub const EXIT_CODE_MISSING_RECORDS: i32 = 2;
