//! DNS module tests.

use super::*;
use crate::error_handling::DnsLookupError;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use std::sync::Arc;
use std::time::Duration;

/// Creates a test DNS resolver with short timeouts for faster test execution.
fn create_test_resolver() -> hickory_resolver::TokioAsyncResolver {
    let mut opts = ResolverOpts::default();
    opts.timeout = Duration::from_secs(5);
    opts.attempts = 1;
    opts.ndots = 0;

    hickory_resolver::TokioAsyncResolver::tokio(ResolverConfig::default(), opts)
}

#[test]
fn test_classify_timeout() {
    let err = ResolveError::from(ResolveErrorKind::Timeout);
    assert_eq!(classify_resolve_error(&err), Err(DnsLookupError::Timeout));
}

#[test]
fn test_classify_timeout_by_message() {
    let err = ResolveError::from("request timed out".to_string());
    assert_eq!(classify_resolve_error(&err), Err(DnsLookupError::Timeout));
}

#[test]
fn test_classify_other_error_keeps_message() {
    let err = ResolveError::from("connection refused".to_string());
    match classify_resolve_error(&err) {
        Err(DnsLookupError::Resolver(msg)) => assert!(msg.contains("connection refused")),
        other => panic!("Expected Resolver error, got {other:?}"),
    }
}

struct FixedResolver(Vec<String>);

impl TxtResolver for FixedResolver {
    async fn lookup_txt(&self, _name: &str) -> Result<Vec<String>, DnsLookupError> {
        Ok(self.0.clone())
    }
}

#[tokio::test]
async fn test_arc_resolver_delegates() {
    let resolver = Arc::new(FixedResolver(vec!["v=spf1 -all".to_string()]));
    let records = resolver.lookup_txt("example.com").await.unwrap();
    assert_eq!(records, vec!["v=spf1 -all".to_string()]);
}

#[tokio::test]
#[ignore = "requires network access"]
async fn test_lookup_txt_records_live() {
    let resolver = create_test_resolver();
    // google.com publishes an SPF record
    let records = lookup_txt_records("google.com", &resolver)
        .await
        .expect("TXT lookup should succeed for google.com");
    assert!(records.iter().any(|r| r.contains("v=spf1")));
}

#[tokio::test]
#[ignore = "requires network access"]
async fn test_lookup_txt_records_nxdomain_live() {
    let resolver = create_test_resolver();
    // .invalid is reserved and never resolves
    let result = lookup_txt_records("definitely-does-not-exist-12345.invalid", &resolver).await;
    match result {
        Ok(records) => assert!(records.is_empty()),
        Err(e) => assert_eq!(e, DnsLookupError::NxDomain),
    }
}
