//! TXT record queries.

use std::future::Future;
use std::sync::Arc;

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use hickory_resolver::proto::op::ResponseCode;
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::DnsLookupError;

/// Anything that can answer DNS TXT queries.
///
/// Implemented for `hickory-resolver`'s `TokioAsyncResolver`; tests supply
/// in-memory implementations.
pub trait TxtResolver: Send + Sync {
    /// Returns the TXT values published at `name`, in resolver order.
    ///
    /// Each value is one TXT record with its character-strings concatenated.
    fn lookup_txt(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<String>, DnsLookupError>> + Send;
}

impl TxtResolver for TokioAsyncResolver {
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, DnsLookupError> {
        lookup_txt_records(name, self).await
    }
}

impl<T: TxtResolver> TxtResolver for Arc<T> {
    fn lookup_txt(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Vec<String>, DnsLookupError>> + Send {
        (**self).lookup_txt(name)
    }
}

/// Maps a resolver error onto the lookup outcome.
///
/// Returns `Ok(())` when the error only means the name exists but has no TXT
/// records (NOERROR with an empty answer).
///
/// # Errors
///
/// Returns the `DnsLookupError` that describes the failure.
pub fn classify_resolve_error(e: &ResolveError) -> Result<(), DnsLookupError> {
    match e.kind() {
        ResolveErrorKind::NoRecordsFound { response_code, .. } => match *response_code {
            ResponseCode::NoError => Ok(()),
            ResponseCode::NXDomain => Err(DnsLookupError::NxDomain),
            code => Err(DnsLookupError::Resolver(format!(
                "server responded with {code}"
            ))),
        },
        ResolveErrorKind::Timeout => Err(DnsLookupError::Timeout),
        _ => {
            let error_msg = e.to_string();
            if error_msg.contains("timeout") || error_msg.contains("timed out") {
                Err(DnsLookupError::Timeout)
            } else {
                Err(DnsLookupError::Resolver(error_msg))
            }
        }
    }
}

/// Queries TXT records for a name.
///
/// The name is queried as fully qualified so that no search domain from the
/// system configuration is appended.
///
/// # Arguments
///
/// * `name` - The name to query (e.g. `_dmarc.example.com`)
/// * `resolver` - The DNS resolver instance
///
/// # Returns
///
/// A vector of TXT record strings, or an empty vector if the name has no TXT records.
///
/// # Errors
///
/// Returns `DnsLookupError` for NXDOMAIN, timeouts, and other resolver failures.
pub async fn lookup_txt_records(
    name: &str,
    resolver: &TokioAsyncResolver,
) -> Result<Vec<String>, DnsLookupError> {
    let fqdn = if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{name}.")
    };

    match resolver.lookup(fqdn.as_str(), RecordType::TXT).await {
        Ok(lookup) => {
            let txt_records: Vec<String> = lookup
                .iter()
                .filter_map(|rdata| {
                    if let RData::TXT(txt) = rdata {
                        // TXT records can contain multiple strings - join them
                        Some(
                            txt.iter()
                                .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                                .collect::<Vec<String>>()
                                .join(""),
                        )
                    } else {
                        None
                    }
                })
                .collect();
            log::debug!("Found {} TXT records for {name}", txt_records.len());
            Ok(txt_records)
        }
        Err(e) => match classify_resolve_error(&e) {
            Ok(()) => {
                log::debug!("No TXT records for {name}");
                Ok(Vec::new())
            }
            Err(DnsLookupError::NxDomain) => {
                log::debug!("TXT lookup for {name}: NXDOMAIN");
                Err(DnsLookupError::NxDomain)
            }
            Err(DnsLookupError::Timeout) => {
                log::warn!("TXT record lookup timed out for {name}: {e}");
                Err(DnsLookupError::Timeout)
            }
            Err(other) => {
                log::warn!("Failed to lookup TXT records for {name}: {e}");
                Err(other)
            }
        },
    }
}
