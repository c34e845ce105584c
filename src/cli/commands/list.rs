//! CLI implementation for `command-runner list`

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;

use crate::cli::output::{is_json, print_info, print_line, status};
use crate::infra::tasks_store;

/// Execute the list command
pub async fn execute(tasks_file: &Path) -> Result<()> {
    let tasks = tasks_store::load_tasks(tasks_file)
        .with_context(|| format!("Failed to load tasks from {}", tasks_file.display()))?;
    let now = Local::now().naive_local();

    if is_json() {
        let entries: Vec<_> = tasks
            .iter()
            .map(|task| {
                serde_json::json!({
                    "task": task.to_record(),
                    "active_now": task.is_active_at(now),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if tasks.is_empty() {
        print_info(&format!("No tasks in {}", tasks_file.display()));
        return Ok(());
    }

    print_line(&format!("Tasks in {}:", tasks_file.display()));
    for task in &tasks {
        let (marker, state) = if task.is_active_at(now) {
            (status::SUCCESS, "active now")
        } else {
            ("-", "idle")
        };
        let record = task.to_record();
        print_line(&format!(
            "  {marker} {} [{}] {}-{} every {} ({state})",
            task, record.days, record.time_start, record.time_end, record.reload_time
        ));
    }
    Ok(())
}
