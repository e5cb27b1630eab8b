//! Report presentation and exit-code policy used by the binary.

pub mod exit_code;
pub mod render;

// Re-export public API
pub use exit_code::evaluate_exit_code;
pub use render::{render_json, render_report, render_table};
