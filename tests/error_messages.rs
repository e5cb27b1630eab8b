//! Tests to ensure error messages are actionable and consistent.

use mail_dns_check::domain::validate_domain;
use mail_dns_check::{CheckError, Config};

#[test]
fn test_missing_domain_message_explains_usage() {
    let msg = CheckError::MissingDomain.to_string();
    assert!(msg.contains("Please provide a domain name"));
    assert!(msg.contains("Example: mail_dns_check example.com"));
}

#[test]
fn test_invalid_domain_message_names_input_and_reason() {
    let err = validate_domain("exa mple.com").unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("exa mple.com"), "message was: {msg}");
    assert!(msg.contains("' '"), "message was: {msg}");
}

#[test]
fn test_config_validation_errors_are_descriptive() {
    let config = Config {
        lookup_timeout_secs: 0,
        ..Default::default()
    };
    let err = config.validate().unwrap_err();
    assert_eq!(err.field, "lookup_timeout_secs");
    assert!(err.message.contains("greater than 0"));

    let config = Config {
        lookup_timeout_secs: 120,
        ..Default::default()
    };
    let err = config.validate().unwrap_err();
    assert!(err.message.contains("at most 30"));

    let config = Config {
        dkim_selector: "sel/ector".to_string(),
        ..Default::default()
    };
    let err = config.validate().unwrap_err();
    assert_eq!(err.field, "dkim_selector");
    assert!(err.message.contains("sel/ector"));
}
