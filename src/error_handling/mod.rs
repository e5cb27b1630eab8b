//! Error handling.
//!
//! Error types are split by where they stop processing:
//! - **Initialization**: logger or resolver setup failed
//! - **Input**: the domain or selector was missing or malformed; no lookups run
//! - **DNS lookup**: a single TXT query failed; absorbed into that record's status
//! - **Configuration**: an option value is out of range

mod types;

// Re-export public API
pub use types::{CheckError, ConfigValidationError, DnsLookupError, InitializationError};
