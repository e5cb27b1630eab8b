//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `mail_dns_check` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - Report rendering and exit codes
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use mail_dns_check::app::{evaluate_exit_code, render_report};
use mail_dns_check::config::EXIT_CODE_ERROR;
use mail_dns_check::initialization::init_logger_with;
use mail_dns_check::{run_check, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // A .env file may set RUST_LOG; it is optional
    let _ = dotenvy::dotenv();

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    if let Err(e) = config.validate() {
        eprintln!("mail_dns_check error: {e}");
        process::exit(EXIT_CODE_ERROR);
    }

    match run_check(&config).await {
        Ok(report) => {
            let output =
                render_report(&report, config.format).context("Failed to render report")?;
            println!("{output}");
            let code = evaluate_exit_code(config.fail_on, &report);
            if code != 0 {
                process::exit(code);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("mail_dns_check error: {e}");
            process::exit(EXIT_CODE_ERROR);
        }
    }
}
