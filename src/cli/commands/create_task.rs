//! CLI implementation for `command-runner create-task`
//!
//! Fields given as flags are used as-is; the rest are prompted for on
//! stdin. Prompts go to stderr under `--json`. The task is validated before anything is written.

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Args;

use crate::cli::output::{is_json, print_success};
use crate::core::task::{Task, TaskRecord};
use crate::infra::tasks_store;

/// Task fields that may be supplied on the command line
#[derive(Args, Debug, Clone, Default)]
pub struct TaskFields {
    /// Command to run
    #[arg(long)]
    pub command: Option<String>,

    /// Command owner
    #[arg(long)]
    pub owner: Option<String>,

    /// Days of the week it should execute (e.g. mo--we--frsasu)
    #[arg(long)]
    pub days: Option<String>,

    /// Start of execution window (HH:MM)
    #[arg(long = "start", value_name = "HH:MM")]
    pub time_start: Option<String>,

    /// End of execution window (HH:MM)
    #[arg(long = "end", value_name = "HH:MM")]
    pub time_end: Option<String>,

    /// Time before second execution (H:MM)
    #[arg(long = "reload", value_name = "H:MM")]
    pub reload_time: Option<String>,
}

/// Execute the create-task command
pub async fn execute(tasks_file: &Path, fields: TaskFields) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    // stdout carries only the JSON document in --json mode
    let mut prompt_out: Box<dyn Write> = if is_json() {
        Box::new(io::stderr())
    } else {
        Box::new(io::stdout())
    };
    let record = complete_record(fields, &mut input, &mut prompt_out)?;

    let task = Task::from_record(&record).context("Invalid task")?;
    tasks_store::append_task(tasks_file, &task)
        .with_context(|| format!("Failed to add task to {}", tasks_file.display()))?;

    if is_json() {
        let json = serde_json::json!({
            "status": "success",
            "tasks_file": tasks_file.display().to_string(),
            "task": record,
        });
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        print_success(&format!("Added {task} to {}", tasks_file.display()));
    }
    Ok(())
}

/// Fill every missing field by prompting on `output` and reading `input`
pub fn complete_record<R: BufRead, W: Write>(
    fields: TaskFields,
    input: &mut R,
    output: &mut W,
) -> Result<TaskRecord> {
    let mut ask = |value: Option<String>, label: &str| -> Result<String> {
        match value {
            Some(value) => Ok(value),
            None => prompt(input, output, label),
        }
    };

    Ok(TaskRecord {
        command: ask(fields.command, "Command to run")?,
        owner: ask(fields.owner, "Command owner")?,
        days: ask(fields.days, "Days of the week it should execute")?,
        time_start: ask(fields.time_start, "Start of execution window")?,
        time_end: ask(fields.time_end, "End of execution window")?,
        reload_time: ask(fields.reload_time, "Time before second execution")?,
    })
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> Result<String> {
    write!(output, "{label}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        bail!("Input ended before '{label}' was answered");
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
