//! DNS TXT resolution.
//!
//! This module provides the resolver seam used by the checker:
//! - `TxtResolver` - trait for anything that can answer TXT queries
//! - `lookup_txt_records()` - TXT query against a `hickory-resolver` instance
//!
//! An answer with no TXT values is `Ok(vec![])`. NXDOMAIN, timeouts, and other
//! resolver failures are reported as `DnsLookupError` so callers can tell
//! them apart.

mod records;

// Re-export public API
pub use records::{classify_resolve_error, lookup_txt_records, TxtResolver};

#[cfg(test)]
mod tests;
