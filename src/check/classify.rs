//! Marker matching and per-record classification.
//!
//! Matching is deliberately loose in `MatchMode::Contains`: a value counts as
//! a record if the marker appears anywhere in it. Record syntax is never
//! validated.

use super::types::{LookupStatus, MatchMode, RecordLookupResult, RecordType};
use crate::error_handling::DnsLookupError;

/// Returns true if `value` carries `marker` under the given mode.
///
/// Comparison is ASCII case-insensitive.
pub fn matches_marker(value: &str, marker: &str, mode: MatchMode) -> bool {
    let value = value.to_ascii_lowercase();
    let marker = marker.to_ascii_lowercase();
    match mode {
        MatchMode::Contains => value.contains(&marker),
        MatchMode::Prefix => value.trim_start().starts_with(&marker),
    }
}

/// Finds the first TXT value carrying `marker`, in the order given.
pub fn find_record<'a>(records: &'a [String], marker: &str, mode: MatchMode) -> Option<&'a str> {
    records
        .iter()
        .find(|txt| matches_marker(txt, marker, mode))
        .map(String::as_str)
}

/// Turns the answer for one query name into a lookup result.
pub fn classify(
    record_type: RecordType,
    query_name: &str,
    answer: Result<Vec<String>, DnsLookupError>,
    mode: MatchMode,
) -> RecordLookupResult {
    match answer {
        Ok(records) if records.is_empty() => {
            RecordLookupResult::not_found(record_type, query_name, LookupStatus::NoRecords)
        }
        Ok(records) => match find_record(&records, record_type.marker(), mode) {
            Some(value) => RecordLookupResult::found(record_type, query_name, value.to_string()),
            None => RecordLookupResult::not_found(record_type, query_name, LookupStatus::NoMatch),
        },
        Err(DnsLookupError::NxDomain) => {
            RecordLookupResult::not_found(record_type, query_name, LookupStatus::NxDomain)
        }
        Err(DnsLookupError::Timeout) => {
            RecordLookupResult::not_found(record_type, query_name, LookupStatus::Timeout)
        }
        Err(DnsLookupError::Resolver(msg)) => RecordLookupResult::not_found(
            record_type,
            query_name,
            LookupStatus::ResolverError(msg),
        ),
    }
}
