//! Tests for command-line parsing into `Config`.

use clap::Parser;
use mail_dns_check::{Config, FailOn, LogFormat, LogLevel, MatchMode, OutputFormat};

#[test]
fn test_cli_domain_only() {
    let config = Config::try_parse_from(["mail_dns_check", "example.com"])
        .expect("Should parse a bare domain");
    assert_eq!(config.domain.as_deref(), Some("example.com"));
    assert_eq!(config.dkim_selector, "default");
    assert_eq!(config.match_mode, MatchMode::Contains);
    assert_eq!(config.lookup_timeout_secs, 3);
    assert_eq!(config.format, OutputFormat::Table);
    assert_eq!(config.fail_on, FailOn::Never);
    assert_eq!(
        log::LevelFilter::from(config.log_level),
        log::LevelFilter::from(LogLevel::Warn)
    );
    match config.log_format {
        LogFormat::Plain => {}
        LogFormat::Json => panic!("Should be Plain format"),
    }
}

#[test]
fn test_cli_all_options() {
    let config = Config::try_parse_from([
        "mail_dns_check",
        "example.com",
        "--dkim-selector",
        "google",
        "--match-mode",
        "prefix",
        "--lookup-timeout-secs",
        "5",
        "--format",
        "json",
        "--fail-on",
        "any-missing",
        "--log-level",
        "debug",
        "--log-format",
        "json",
    ])
    .expect("Should parse all options");

    assert_eq!(config.dkim_selector, "google");
    assert_eq!(config.match_mode, MatchMode::Prefix);
    assert_eq!(config.lookup_timeout_secs, 5);
    assert_eq!(config.format, OutputFormat::Json);
    assert_eq!(config.fail_on, FailOn::AnyMissing);
    assert_eq!(
        log::LevelFilter::from(config.log_level),
        log::LevelFilter::Debug
    );
    assert!(matches!(config.log_format, LogFormat::Json));
}

#[test]
fn test_cli_without_domain_parses() {
    let config = Config::try_parse_from(["mail_dns_check"]).expect("Domain is optional");
    assert!(config.domain.is_none());
}

#[test]
fn test_cli_rejects_unknown_match_mode() {
    let result = Config::try_parse_from(["mail_dns_check", "example.com", "--match-mode", "exact"]);
    assert!(result.is_err());
}

#[test]
fn test_cli_rejects_non_numeric_timeout() {
    let result = Config::try_parse_from([
        "mail_dns_check",
        "example.com",
        "--lookup-timeout-secs",
        "soon",
    ]);
    assert!(result.is_err());
}
