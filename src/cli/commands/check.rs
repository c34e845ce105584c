//! CLI implementation for `command-runner check`
//!
//! Validates the runner installation without running anything.

use std::path::Path;

use anyhow::{bail, Result};

use crate::cli::output::{is_json, is_quiet, print_detail, print_info, print_success, status};
use crate::core::check::run_check;

/// Execute the check command
pub async fn execute(config_file: &Path, tasks_file: &Path) -> Result<()> {
    let report = run_check(config_file, tasks_file);

    if is_json() {
        let json_result = serde_json::json!({
            "status": if report.all_passed() { "success" } else { "error" },
            "checks": report.checks.iter().map(|c| serde_json::json!({
                "name": c.name,
                "passed": c.passed,
                "detail": c.detail,
                "error": c.error,
            })).collect::<Vec<_>>(),
            "passed_count": report.passed_count(),
            "total_count": report.checks.len(),
        });
        println!("{}", serde_json::to_string_pretty(&json_result)?);
    } else if is_quiet() {
        for check in report.checks.iter().filter(|c| !c.passed) {
            eprintln!("{} {}", status::ERROR, check.name);
        }
    } else {
        print_info("Checking command-runner setup...");
        println!();
        for check in &report.checks {
            if check.passed {
                let detail = check
                    .detail
                    .as_ref()
                    .map(|d| format!(" ({d})"))
                    .unwrap_or_default();
                println!("  {} {}{detail}", status::SUCCESS, check.name);
            } else {
                println!("  {} {}", status::ERROR, check.name);
                if let Some(error) = &check.error {
                    print_detail(&format!("  Error: {error}"));
                }
            }
        }
        println!();
    }

    let passed = report.passed_count();
    let total = report.checks.len();
    if !report.all_passed() {
        bail!("{passed}/{total} checks passed");
    }
    print_success(&format!("All checks passed ({passed}/{total})"));
    Ok(())
}
