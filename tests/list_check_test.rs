//! Integration tests for `command-runner list` and `command-runner check`

mod common;

use common::TestProject;

#[test]
fn test_list_shows_tasks() {
    let project = TestProject::with_tasks(&[
        "date,ops,--------------,00:00,23:59,1:00",
        "uptime,zt,mo--we--------,08:00,09:00,0:30",
    ]);

    let output = project.run(&["list", "--tasks-file", "tasks.csv"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<(date) from ops, executed on never>"));
    assert!(stdout.contains("<(uptime) from zt, executed on never>"));
    assert!(stdout.contains("(idle)"));
}

#[test]
fn test_list_json() {
    let project = TestProject::with_tasks(&["date,ops,--------------,00:00,23:59,1:00"]);

    let output = project.run(&["--json", "list", "--tasks-file", "tasks.csv"]);

    assert!(output.status.success());
    let entries: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(entries[0]["task"]["command"], "date");
    assert_eq!(entries[0]["task"]["days"], "--------------");
    assert_eq!(entries[0]["active_now"], false);
}

#[test]
fn test_list_missing_file_fails() {
    let project = TestProject::new();

    let output = project.run(&["list", "--tasks-file", "absent.csv"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.starts_with("✗"), "stderr: {stderr}");
}

#[test]
fn test_check_passes_for_valid_setup() {
    let project = TestProject::with_tasks(&["date,ops,motuwethfrsasu,00:00,23:59,1:00"]);

    let output = project.run(&[
        "check",
        "--config-file",
        "command_runner.toml",
        "--tasks-file",
        "tasks.csv",
    ]);

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "stdout: {stdout}");
    assert!(stdout.contains("All checks passed (3/3)"));
}

#[test]
fn test_check_reports_bad_config() {
    let project = TestProject::with_tasks(&[]);
    project.create_file("command_runner.toml", "[command_runner]\ncheck_interval = 0\n");

    let output = project.run(&[
        "--json",
        "check",
        "--config-file",
        "command_runner.toml",
        "--tasks-file",
        "tasks.csv",
    ]);

    assert!(!output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid JSON");
    assert_eq!(report["status"], "error");
    assert_eq!(report["checks"][0]["passed"], false);
    assert_eq!(report["checks"][1]["passed"], true);
}

#[test]
fn test_no_subcommand_prints_help() {
    let project = TestProject::new();

    let output = project.run(&[]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("create-task"));
    assert!(stdout.contains("run"));
}

#[test]
fn test_version_flag() {
    let project = TestProject::new();

    let output = project.run(&["--version"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}
