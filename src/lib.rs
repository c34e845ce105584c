//! command-runner - run shell commands on a weekly timetable
//!
//! Tasks are rows of a CSV file. Each names a shell command, the weekdays
//! and time window it may run in, and the minimum gap between two runs.
//! The runner polls the task table at a fixed interval and executes every
//! task that is due.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Task model, runner config and the scheduling loop
//! - [`infra`] - Infrastructure layer (tasks file, processes, paths)
//! - [`config`] - Configuration defaults
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;
