//! Report rendering.
//!
//! The table has one row per record type: a Found/Not Found badge and the
//! raw record text or a placeholder.

use colored::*;

use crate::check::{CheckReport, LookupStatus, RecordLookupResult, RecordType};
use crate::config::OutputFormat;

const STATUS_WIDTH: usize = "Not Found".len();

fn row_label(report: &CheckReport, result: &RecordLookupResult) -> String {
    match result.record_type {
        RecordType::Dkim => format!("DKIM (Selector: {})", report.dkim_selector()),
        other => other.to_string(),
    }
}

/// Escapes control characters so record text cannot drive the terminal.
fn escape_control(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_control() {
            out.extend(c.escape_default());
        } else {
            out.push(c);
        }
    }
    out
}

fn status_badge(result: &RecordLookupResult) -> ColoredString {
    if result.found {
        format!("{:<width$}", "Found", width = STATUS_WIDTH).green().bold()
    } else {
        format!("{:<width$}", "Not Found", width = STATUS_WIDTH).red().bold()
    }
}

/// Renders the report as a human-readable table.
pub fn render_table(report: &CheckReport) -> String {
    let labels: Vec<String> = report
        .results()
        .iter()
        .map(|r| row_label(report, r))
        .collect();
    let label_width = labels
        .iter()
        .map(String::len)
        .chain(std::iter::once("Record Type".len()))
        .max()
        .unwrap_or_default();

    let mut out = format!("Results for: {}\n\n", report.domain().bold());
    out.push_str(&format!(
        "{:<label_width$}  {:<status_width$}  {}\n",
        "Record Type",
        "Status",
        "Details",
        status_width = STATUS_WIDTH
    ));

    for (label, result) in labels.iter().zip(report.results()) {
        out.push_str(&format!(
            "{label:<label_width$}  {}  {}",
            status_badge(result),
            escape_control(&result.details())
        ));
        // Empty answers and non-matching records are already explained by the placeholder
        if !matches!(
            result.status,
            LookupStatus::Found | LookupStatus::NoRecords | LookupStatus::NoMatch
        ) {
            out.push_str(&format!(" {}", format!("({})", result.status).dimmed()));
        }
        out.push('\n');
    }
    out
}

/// Renders the report as pretty-printed JSON.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn render_json(report: &CheckReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Renders the report in the requested output format.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render_report(
    report: &CheckReport,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Table => Ok(render_table(report)),
        OutputFormat::Json => render_json(report),
    }
}
