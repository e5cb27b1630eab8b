//! Exit code policy (`--fail-on`).

use crate::check::CheckReport;
use crate::config::{FailOn, EXIT_CODE_MISSING_RECORDS};

/// Exit code for a completed check under the given policy.
pub fn evaluate_exit_code(fail_on: FailOn, report: &CheckReport) -> i32 {
    match fail_on {
        FailOn::Never => 0,
        FailOn::AnyMissing => {
            if report.all_found() {
                0
            } else {
                EXIT_CODE_MISSING_RECORDS
            }
        }
    }
}
