//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Test project context
///
/// Creates a temporary directory holding a config file and a tasks file.
pub struct TestProject {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new test project in a temporary directory
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Get the path to the test project directory
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Create a file in the test project
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Check if a file exists in the test project
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Read a file from the test project
    pub fn read_file(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(name)).expect("Failed to read file")
    }

    /// Write the sample config and the given task rows
    pub fn with_tasks(rows: &[&str]) -> Self {
        let project = Self::new();
        project.create_file("command_runner.toml", SAMPLE_CONFIG);
        let mut tasks = format!("{TASKS_HEADER}\n");
        for row in rows {
            tasks.push_str(row);
            tasks.push('\n');
        }
        project.create_file("tasks.csv", &tasks);
        project
    }

    /// Build a command-runner invocation rooted in the project
    pub fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_command-runner"));
        cmd.current_dir(self.path());
        cmd.env_remove("COMMAND_RUNNER_CONFIG");
        cmd.env_remove("COMMAND_RUNNER_TASKS");
        cmd.env_remove("RUST_LOG");
        cmd.args(args);
        cmd
    }

    /// Run command-runner with arguments
    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .stdin(Stdio::null())
            .output()
            .expect("Failed to execute command-runner")
    }

    /// Run command-runner feeding `input` on stdin
    pub fn run_with_input(&self, args: &[&str], input: &str) -> Output {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn command-runner");
        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_bytes())
            .expect("Failed to write stdin");
        child
            .wait_with_output()
            .expect("Failed to wait for command-runner")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Tasks file header
pub const TASKS_HEADER: &str = "command,owner,days,time_start,time_end,reload_time";

/// Sample runner config
pub const SAMPLE_CONFIG: &str = r#"
[command_runner]
check_interval = 1
max_parallel = 2
shell = "sh"
"#;
