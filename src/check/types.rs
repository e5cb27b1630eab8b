//! Check result types.

use std::fmt;

use clap::ValueEnum;
use serde::Serialize;
use strum_macros::EnumIter;

use crate::config::{DKIM_MARKER, DMARC_MARKER, SPF_MARKER};

/// The three mail authentication record types, in report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordType {
    Spf,
    Dmarc,
    Dkim,
}

impl RecordType {
    /// Marker a TXT value must carry to count as this record type.
    pub fn marker(&self) -> &'static str {
        match self {
            RecordType::Spf => SPF_MARKER,
            RecordType::Dmarc => DMARC_MARKER,
            RecordType::Dkim => DKIM_MARKER,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::Spf => "SPF",
            RecordType::Dmarc => "DMARC",
            RecordType::Dkim => "DKIM",
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a TXT value is matched against a record marker.
///
/// Both modes compare ASCII case-insensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Marker may appear anywhere in the value (lenient, the historical behavior)
    #[default]
    Contains,
    /// Value must start with the marker, ignoring leading whitespace
    Prefix,
}

/// Why a record was or was not found.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum LookupStatus {
    /// A TXT value carried the marker
    Found,
    /// The name exists but has no TXT records
    NoRecords,
    /// TXT records exist but none carries the marker
    NoMatch,
    /// The queried name does not exist
    NxDomain,
    /// The lookup did not finish in time
    Timeout,
    /// Any other resolver failure
    ResolverError(String),
}

impl fmt::Display for LookupStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupStatus::Found => f.write_str("record found"),
            LookupStatus::NoRecords => f.write_str("no TXT records returned"),
            LookupStatus::NoMatch => f.write_str("no TXT record carries the marker"),
            LookupStatus::NxDomain => f.write_str("name does not exist (NXDOMAIN)"),
            LookupStatus::Timeout => f.write_str("lookup timed out"),
            LookupStatus::ResolverError(msg) => write!(f, "resolver error: {msg}"),
        }
    }
}

/// Outcome of looking up one record type.
///
/// `found` is true exactly when `status` is `LookupStatus::Found`, and
/// `raw_value` is present exactly when `found` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordLookupResult {
    pub record_type: RecordType,
    /// Name that was queried, e.g. `_dmarc.example.com`
    pub query_name: String,
    pub found: bool,
    /// Full text of the first matching TXT value
    pub raw_value: Option<String>,
    pub status: LookupStatus,
}

impl RecordLookupResult {
    pub fn found(record_type: RecordType, query_name: &str, raw_value: String) -> Self {
        Self {
            record_type,
            query_name: query_name.to_string(),
            found: true,
            raw_value: Some(raw_value),
            status: LookupStatus::Found,
        }
    }

    /// A not-found result. A `LookupStatus::Found` status is not accepted here
    /// and is recorded as `NoMatch`.
    pub fn not_found(record_type: RecordType, query_name: &str, status: LookupStatus) -> Self {
        let status = match status {
            LookupStatus::Found => LookupStatus::NoMatch,
            other => other,
        };
        Self {
            record_type,
            query_name: query_name.to_string(),
            found: false,
            raw_value: None,
            status,
        }
    }

    /// Placeholder shown in place of a missing record, e.g. `No v=spf1 record found.`
    pub fn placeholder(&self) -> String {
        format!("No {} record found.", self.record_type.marker())
    }

    /// The raw record text, or the placeholder when not found.
    pub fn details(&self) -> String {
        match &self.raw_value {
            Some(value) => value.clone(),
            None => self.placeholder(),
        }
    }
}

/// SPF, DMARC, and DKIM lookup results for one domain, in that order.
///
/// Built once per check and not modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    domain: String,
    dkim_selector: String,
    match_mode: MatchMode,
    results: [RecordLookupResult; 3],
}

impl CheckReport {
    pub(crate) fn new(
        domain: String,
        dkim_selector: String,
        match_mode: MatchMode,
        spf: RecordLookupResult,
        dmarc: RecordLookupResult,
        dkim: RecordLookupResult,
    ) -> Self {
        debug_assert_eq!(spf.record_type, RecordType::Spf);
        debug_assert_eq!(dmarc.record_type, RecordType::Dmarc);
        debug_assert_eq!(dkim.record_type, RecordType::Dkim);
        Self {
            domain,
            dkim_selector,
            match_mode,
            results: [spf, dmarc, dkim],
        }
    }

    /// The validated, normalized domain that was checked.
    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn dkim_selector(&self) -> &str {
        &self.dkim_selector
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    /// All three results in fixed order: SPF, DMARC, DKIM.
    pub fn results(&self) -> &[RecordLookupResult] {
        &self.results
    }

    pub fn get(&self, record_type: RecordType) -> &RecordLookupResult {
        match record_type {
            RecordType::Spf => &self.results[0],
            RecordType::Dmarc => &self.results[1],
            RecordType::Dkim => &self.results[2],
        }
    }

    pub fn spf(&self) -> &RecordLookupResult {
        self.get(RecordType::Spf)
    }

    pub fn dmarc(&self) -> &RecordLookupResult {
        self.get(RecordType::Dmarc)
    }

    pub fn dkim(&self) -> &RecordLookupResult {
        self.get(RecordType::Dkim)
    }

    pub fn all_found(&self) -> bool {
        self.results.iter().all(|r| r.found)
    }

    /// Record types that were not found, in report order.
    pub fn missing(&self) -> Vec<RecordType> {
        self.results
            .iter()
            .filter(|r| !r.found)
            .map(|r| r.record_type)
            .collect()
    }
}
