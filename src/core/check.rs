//! Installation check
//!
//! Validates the runner config, the tasks file and the configured shell,
//! collecting every problem instead of stopping at the first.

use std::path::Path;

use super::config::RunnerConfig;
use crate::config::defaults;
use crate::infra::executor::shell_available;
use crate::infra::tasks_store;

/// Result of a single check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    /// What was checked
    pub name: String,
    /// Whether the check passed
    pub passed: bool,
    /// Summary on success
    pub detail: Option<String>,
    /// Error message if the check failed
    pub error: Option<String>,
}

impl CheckResult {
    /// Create a passing check result
    pub fn pass(name: &str, detail: Option<String>) -> Self {
        Self {
            name: name.to_string(),
            passed: true,
            detail,
            error: None,
        }
    }

    /// Create a failing check result
    pub fn fail(name: &str, error: String) -> Self {
        Self {
            name: name.to_string(),
            passed: false,
            detail: None,
            error: Some(error),
        }
    }
}

/// All check results, in the order they ran
#[derive(Debug, Default)]
pub struct CheckReport {
    pub checks: Vec<CheckResult>,
}

impl CheckReport {
    /// Check if every check passed
    pub fn all_passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Count passed checks
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }
}

/// Check the config file, the tasks file and the shell
///
/// The shell check uses the configured shell, or the default one when the
/// config could not be read.
pub fn run_check(config_path: &Path, tasks_path: &Path) -> CheckReport {
    let mut report = CheckReport::default();

    let shell = match RunnerConfig::load_from_path(config_path) {
        Ok(config) => {
            report.checks.push(CheckResult::pass(
                "Config file",
                Some(format!(
                    "check every {}s, up to {} in parallel",
                    config.check_interval, config.max_parallel
                )),
            ));
            config.shell
        }
        Err(e) => {
            report.checks.push(CheckResult::fail("Config file", e.to_string()));
            defaults::SHELL.to_string()
        }
    };

    match tasks_store::load_tasks(tasks_path) {
        Ok(tasks) => report.checks.push(CheckResult::pass(
            "Tasks file",
            Some(format!("{} task(s)", tasks.len())),
        )),
        Err(e) => report.checks.push(CheckResult::fail("Tasks file", e.to_string())),
    }

    if shell_available(&shell) {
        report
            .checks
            .push(CheckResult::pass("Shell", Some(shell)));
    } else {
        report
            .checks
            .push(CheckResult::fail("Shell", format!("'{shell}' not found in PATH")));
    }

    report
}
