//! CLI implementation for `command-runner run`
//!
//! Loads the config and tasks, then ticks until Ctrl-C or SIGTERM. With
//! `--once` a single tick runs and the command exits.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;

use crate::cli::output::{is_json, print_detail, print_info, print_line, print_warning, verbosity};
use crate::core::runner::{ExecutionReport, Runner};
use crate::core::task::Task;
use crate::infra::executor::ShellExecutor;

/// Execute the run command
pub async fn execute(config_file: &Path, tasks_file: &Path, once: bool) -> Result<()> {
    let mut runner = Runner::load(config_file, tasks_file).with_context(|| {
        format!(
            "Failed to load runner from {} and {}",
            config_file.display(),
            tasks_file.display()
        )
    })?;

    let executor = ShellExecutor::new(runner.config().shell.clone());
    tracing::info!(
        tasks = runner.tasks().len(),
        check_interval = runner.config().check_interval,
        max_parallel = runner.config().max_parallel,
        shell = %executor.shell(),
        "Runner started"
    );

    print_line("Tasks:");
    print_task_table(runner.tasks());

    if once {
        let reports = runner.tick(Local::now().naive_local(), &executor).await;
        report_tick(&reports, runner.tasks());
        return Ok(());
    }

    runner
        .run(&executor, shutdown_signal(), report_tick)
        .await;
    print_info("Stopped");
    Ok(())
}

/// Print what one tick did
fn report_tick(reports: &[ExecutionReport], tasks: &[Task]) {
    if is_json() {
        for report in reports {
            println!("{}", report_json(report));
        }
        return;
    }

    for report in reports {
        print_line(&format!("Active task: {}", report.task));
    }
    for report in reports {
        match &report.result {
            Ok(outcome) => {
                let code = outcome
                    .exit_code
                    .map_or_else(|| "signal".to_string(), |c| c.to_string());
                print_line(&format!(
                    "Result of command {} was: exit code {code}",
                    report.task.command
                ));
                if verbosity() > 0 && !outcome.stdout.is_empty() {
                    print_detail(outcome.stdout.trim_end());
                }
                if !outcome.success() && !outcome.stderr.is_empty() {
                    print_detail(outcome.stderr.trim_end());
                }
            }
            Err(e) => print_warning(&format!("Task {} could not run: {e}", report.task)),
        }
    }
    print_task_table(tasks);
    print_line("\n");
}

fn print_task_table(tasks: &[Task]) {
    for task in tasks {
        print_line(&task.to_string());
    }
}

fn report_json(report: &ExecutionReport) -> serde_json::Value {
    match &report.result {
        Ok(outcome) => serde_json::json!({
            "command": report.task.command,
            "owner": report.task.owner,
            "finished_at": report.finished_at.to_string(),
            "exit_code": outcome.exit_code,
            "success": outcome.success(),
            "stdout": outcome.stdout,
            "stderr": outcome.stderr,
        }),
        Err(e) => serde_json::json!({
            "command": report.task.command,
            "owner": report.task.owner,
            "finished_at": report.finished_at.to_string(),
            "success": false,
            "error": e.to_string(),
        }),
    }
}

/// Resolves on Ctrl-C, or SIGTERM on unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
    tracing::info!("Shutdown requested");
}
