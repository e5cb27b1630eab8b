//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (markers, timeouts, DNS limits)
//! - CLI option types and parsing
//! - Configuration validation

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, FailOn, LogFormat, LogLevel, OutputFormat};
