//! Scheduling loop
//!
//! Each tick selects the tasks active at that moment, runs their commands
//! with at most `max_parallel` in flight, and stamps every executed task
//! with its completion time. A failed command still counts as executed and
//! waits out its reload time like any other.

use std::future::Future;
use std::path::Path;
use std::time::Instant;

use chrono::{Local, NaiveDateTime, TimeDelta};
use futures::stream::{self, StreamExt};

use super::config::RunnerConfig;
use super::task::Task;
use crate::error::{ExecError, RunnerError};
use crate::infra::executor::{CommandExecutor, ExecutionOutcome};
use crate::infra::tasks_store;

/// What happened to one task during a tick
#[derive(Debug, Clone)]
pub struct ExecutionReport {
    /// Task as it stands after the run
    pub task: Task,
    /// Command outcome, or why it could not start
    pub result: Result<ExecutionOutcome, ExecError>,
    /// Completion time recorded as `last_execution`
    pub finished_at: NaiveDateTime,
}

impl ExecutionReport {
    /// Whether the command ran and exited 0
    pub fn success(&self) -> bool {
        self.result.as_ref().is_ok_and(ExecutionOutcome::success)
    }
}

/// Holds the task table and runs ticks over it
#[derive(Debug, Clone)]
pub struct Runner {
    config: RunnerConfig,
    tasks: Vec<Task>,
}

impl Runner {
    /// Create a runner over already-loaded tasks
    pub fn new(config: RunnerConfig, tasks: Vec<Task>) -> Self {
        Self { config, tasks }
    }

    /// Load config and tasks from disk
    pub fn load(config_path: &Path, tasks_path: &Path) -> Result<Self, RunnerError> {
        let config = RunnerConfig::load_from_path(config_path)?;
        let tasks = tasks_store::load_tasks(tasks_path)?;
        Ok(Self::new(config, tasks))
    }

    /// Loop settings
    pub fn config(&self) -> &RunnerConfig {
        &self.config
    }

    /// Current task table, in file order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Indices of the tasks active at `now`
    pub fn due_tasks(&self, now: NaiveDateTime) -> Vec<usize> {
        self.tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| task.is_active_at(now))
            .map(|(index, _)| index)
            .collect()
    }

    /// Run every task due at `now` and record when each finished
    ///
    /// Reports come back in task order.
    pub async fn tick<E: CommandExecutor>(
        &mut self,
        now: NaiveDateTime,
        executor: &E,
    ) -> Vec<ExecutionReport> {
        let due: Vec<(usize, String)> = self
            .due_tasks(now)
            .into_iter()
            .map(|index| (index, self.tasks[index].command.clone()))
            .collect();

        if due.is_empty() {
            return Vec::new();
        }

        for (index, _) in &due {
            let task = &self.tasks[*index];
            tracing::info!(task = %task, "Active task");
        }

        // completion time includes any wait for a max_parallel slot
        let tick_start = Instant::now();
        let mut results: Vec<_> = stream::iter(due)
            .map(|(index, command)| async move {
                tracing::debug!(%command, "Executing command");
                let result = executor.execute(&command).await;
                let elapsed =
                    TimeDelta::from_std(tick_start.elapsed()).unwrap_or(TimeDelta::zero());
                (index, result, now + elapsed)
            })
            .buffer_unordered(self.config.max_parallel)
            .collect()
            .await;
        results.sort_by_key(|(index, _, _)| *index);

        results
            .into_iter()
            .map(|(index, result, finished_at)| {
                let task = &mut self.tasks[index];
                task.last_execution = Some(finished_at);
                log_result(task, &result);
                ExecutionReport {
                    task: task.clone(),
                    result,
                    finished_at,
                }
            })
            .collect()
    }

    /// Tick, report, sleep; repeat until `shutdown` resolves
    ///
    /// `on_tick` sees each tick's reports and the updated task table.
    /// Shutdown is honoured both while commands run and while sleeping.
    /// A shutdown during a tick abandons that tick: running commands are
    /// killed, and `on_tick` is not called for it, so commands that already
    /// finished in that tick are neither stamped nor reported.
    pub async fn run<E, S, F>(&mut self, executor: &E, shutdown: S, mut on_tick: F)
    where
        E: CommandExecutor,
        S: Future<Output = ()>,
        F: FnMut(&[ExecutionReport], &[Task]),
    {
        tokio::pin!(shutdown);
        let interval = self.config.check_interval();

        loop {
            let now = Local::now().naive_local();
            let reports = tokio::select! {
                () = &mut shutdown => break,
                reports = self.tick(now, executor) => reports,
            };
            on_tick(&reports, &self.tasks);

            tokio::select! {
                () = &mut shutdown => break,
                () = tokio::time::sleep(interval) => {}
            }
        }

        tracing::info!("Runner stopped");
    }
}

fn log_result(task: &Task, result: &Result<ExecutionOutcome, ExecError>) {
    match result {
        Ok(outcome) if outcome.success() => tracing::info!(
            command = %task.command,
            owner = %task.owner,
            duration_ms = millis(outcome),
            "Task finished"
        ),
        Ok(outcome) => tracing::warn!(
            command = %task.command,
            owner = %task.owner,
            exit_code = ?outcome.exit_code,
            duration_ms = millis(outcome),
            stderr = %outcome.stderr.trim_end(),
            "Task exited with failure"
        ),
        Err(e) => tracing::error!(
            command = %task.command,
            owner = %task.owner,
            error = %e,
            "Task could not be started"
        ),
    }
}

fn millis(outcome: &ExecutionOutcome) -> u64 {
    u64::try_from(outcome.duration.as_millis()).unwrap_or(u64::MAX)
}
