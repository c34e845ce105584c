//! Command execution
//!
//! Task commands are handed to a shell as `<shell> -c <command>` with
//! stdout and stderr captured. The [`CommandExecutor`] trait lets the
//! scheduler run against a fake in tests.

use std::future::Future;
use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::process::Command;

use crate::error::ExecError;

/// Result of one finished command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionOutcome {
    /// Exit code, `None` when killed by a signal
    pub exit_code: Option<i32>,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
    /// Wall-clock run time
    pub duration: Duration,
}

impl ExecutionOutcome {
    /// Whether the command exited with status 0
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs task commands
pub trait CommandExecutor {
    /// Run `command` to completion
    fn execute(&self, command: &str) -> impl Future<Output = Result<ExecutionOutcome, ExecError>>;
}

/// Executes commands through a system shell
#[derive(Debug, Clone)]
pub struct ShellExecutor {
    shell: String,
}

impl ShellExecutor {
    /// Create an executor invoking `shell -c`
    pub fn new(shell: impl Into<String>) -> Self {
        Self {
            shell: shell.into(),
        }
    }

    /// Shell program name
    pub fn shell(&self) -> &str {
        &self.shell
    }
}

impl CommandExecutor for ShellExecutor {
    async fn execute(&self, command: &str) -> Result<ExecutionOutcome, ExecError> {
        let started = Instant::now();
        let output = Command::new(&self.shell)
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| ExecError::Spawn {
                shell: self.shell.clone(),
                error: e.to_string(),
            })?;

        Ok(ExecutionOutcome {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            duration: started.elapsed(),
        })
    }
}

/// Check whether a shell program can be found on `PATH`
pub fn shell_available(shell: &str) -> bool {
    which::which(shell).is_ok()
}
