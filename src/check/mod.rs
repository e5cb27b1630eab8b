//! SPF, DMARC, and DKIM record checking.
//!
//! This module provides:
//! - `RecordChecker` - runs the three TXT lookups for a domain
//! - `CheckReport` / `RecordLookupResult` - the per-domain result
//! - Marker matching (`MatchMode::Contains` or `MatchMode::Prefix`)
//!
//! A lookup failure (NXDOMAIN, timeout, resolver error) never fails the
//! check. It is reported as a not-found result with a `LookupStatus`
//! explaining why.

mod checker;
mod classify;
mod types;

// Re-export public API
pub use checker::{check_config, RecordChecker};
pub use classify::{classify, find_record, matches_marker};
pub use types::{CheckReport, LookupStatus, MatchMode, RecordLookupResult, RecordType};
