//! Error types for command-runner
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Errors in a single task definition
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaskError {
    /// Day mask has the wrong shape
    #[error("Invalid days '{value}': expected 14 characters (seven 2-letter slots, e.g. 'mo--we--frsasu')")]
    InvalidDays { value: String },

    /// Wall-clock time is not HH:MM
    #[error("Invalid {field} '{value}': expected HH:MM")]
    InvalidTime { field: &'static str, value: String },

    /// Reload interval is not H:MM
    #[error("Invalid reload_time '{value}': expected H:MM")]
    InvalidReload { value: String },

    /// Required field left empty
    #[error("Field '{field}' cannot be empty")]
    Empty { field: &'static str },
}

/// Tasks file (CSV) errors
#[derive(Error, Debug)]
pub enum StoreError {
    /// File could not be opened or written
    #[error("IO error for '{path}': {error}")]
    Io { path: PathBuf, error: String },

    /// Malformed CSV
    #[error("Failed to parse '{path}': {error}")]
    Csv { path: PathBuf, error: String },

    /// Row parsed but holds an invalid task
    #[error("Invalid task on row {row} of '{path}': {source}")]
    InvalidTask {
        path: PathBuf,
        row: usize,
        source: TaskError,
    },
}

/// Runner configuration (TOML) errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read config file
    #[error("Failed to read config file '{path}': {error}")]
    ReadError { path: PathBuf, error: String },

    /// Failed to parse config file
    #[error("Failed to parse config file '{path}': {error}")]
    ParseError { path: PathBuf, error: String },

    /// Value outside its allowed range
    #[error("Invalid value for '{key}' in '{path}': {message}")]
    InvalidValue {
        path: PathBuf,
        key: &'static str,
        message: String,
    },
}

/// Command execution errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecError {
    /// Shell could not be started
    #[error("Failed to spawn '{shell}': {error}")]
    Spawn { shell: String, error: String },
}

/// Top-level command-runner error type
#[derive(Error, Debug)]
pub enum RunnerError {
    /// Tasks file error
    #[error("Tasks file error: {0}")]
    Store(#[from] StoreError),

    /// Config error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}
