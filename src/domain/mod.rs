//! Domain and selector validation, and query name construction.
//!
//! The domain and DKIM selector arrive as untrusted text. They are validated
//! against DNS label syntax before being interpolated into the derived query
//! names, and the derived names are checked against the total length limit.
//!
//! Key functions:
//! - `validate_domain()` - Trims, normalizes, and validates a domain
//! - `validate_selector()` - Validates a DKIM selector
//! - `spf_query_name()`, `dmarc_query_name()`, `dkim_query_name()` - Build query names
//! - `check_query_name()` - Checks a derived name still fits the length limit

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{DKIM_LABEL, DMARC_LABEL, MAX_DOMAIN_LENGTH, MAX_LABEL_LENGTH};
use crate::error_handling::CheckError;

// Underscores are allowed so that names like `_dmarc` or `s1._domainkey` validate.
static LABEL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_](?:[A-Za-z0-9_-]*[A-Za-z0-9_])?$")
        .expect("label pattern is a valid regex")
});

/// Checks a dotted name label by label.
///
/// Returns a human-readable reason on failure.
fn check_labels(name: &str) -> Result<(), String> {
    if name.len() > MAX_DOMAIN_LENGTH {
        return Err(format!(
            "name is {} characters long (maximum {MAX_DOMAIN_LENGTH})",
            name.len()
        ));
    }
    for label in name.split('.') {
        if label.is_empty() {
            return Err("contains an empty label".to_string());
        }
        if label.len() > MAX_LABEL_LENGTH {
            return Err(format!(
                "label '{label}' is {} characters long (maximum {MAX_LABEL_LENGTH})",
                label.len()
            ));
        }
        if !LABEL_REGEX.is_match(label) {
            let invalid = label
                .chars()
                .find(|c| !c.is_ascii_alphanumeric() && *c != '-' && *c != '_');
            return match invalid {
                Some(c) => Err(format!("label '{label}' contains {c:?}")),
                None => Err(format!("label '{label}' starts or ends with a hyphen")),
            };
        }
    }
    Ok(())
}

/// Validates and normalizes a caller-supplied domain.
///
/// Surrounding whitespace and a single trailing dot are removed and ASCII is
/// lowercased. Internationalized names are not converted; non-ASCII input is
/// rejected.
///
/// # Errors
///
/// Returns `CheckError::MissingDomain` if the input is blank, or
/// `CheckError::InvalidDomain` if it is not a valid DNS name.
pub fn validate_domain(input: &str) -> Result<String, CheckError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CheckError::MissingDomain);
    }
    let without_root = trimmed.strip_suffix('.').unwrap_or(trimmed);
    let normalized = without_root.to_ascii_lowercase();

    check_labels(&normalized).map_err(|reason| CheckError::InvalidDomain {
        domain: input.to_string(),
        reason,
    })?;
    Ok(normalized)
}

/// Validates a DKIM selector.
///
/// Selectors may span several labels (e.g. `2024.mail`), each following the
/// same rules as domain labels.
///
/// # Errors
///
/// Returns `CheckError::InvalidSelector` if the selector is blank or malformed.
pub fn validate_selector(input: &str) -> Result<String, CheckError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(CheckError::InvalidSelector {
            selector: input.to_string(),
            reason: "selector is empty".to_string(),
        });
    }
    let normalized = trimmed.to_ascii_lowercase();
    check_labels(&normalized).map_err(|reason| CheckError::InvalidSelector {
        selector: input.to_string(),
        reason,
    })?;
    Ok(normalized)
}

/// Checks that a name built from validated parts still fits in a DNS query.
///
/// Prefixing `_dmarc` or a DKIM selector can push a valid domain past the
/// total length limit.
///
/// # Errors
///
/// Returns a human-readable reason if the name is too long.
pub fn check_query_name(name: &str) -> Result<(), String> {
    if name.len() > MAX_DOMAIN_LENGTH {
        return Err(format!(
            "query name would be {} characters long (maximum {MAX_DOMAIN_LENGTH})",
            name.len()
        ));
    }
    Ok(())
}

/// Name queried for the SPF record: the domain itself.
pub fn spf_query_name(domain: &str) -> String {
    domain.to_string()
}

/// Name queried for the DMARC record: `_dmarc.<domain>`.
pub fn dmarc_query_name(domain: &str) -> String {
    format!("{DMARC_LABEL}.{domain}")
}

/// Name queried for the DKIM record: `<selector>._domainkey.<domain>`.
pub fn dkim_query_name(selector: &str, domain: &str) -> String {
    format!("{selector}.{DKIM_LABEL}.{domain}")
}
