//! Runner configuration
//!
//! Reads the `[command_runner]` table from the runner's TOML config file.
//!
//! ```toml
//! [command_runner]
//! check_interval = 60
//! max_parallel = 4
//! shell = "sh"
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::defaults;
use crate::error::ConfigError;
use crate::infra::filesystem::expand_home;

/// On-disk layout of the config file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ConfigFile {
    command_runner: RunnerConfig,
}

/// Settings for the scheduling loop
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Seconds to sleep between ticks
    #[serde(default = "default_check_interval")]
    pub check_interval: u64,

    /// Commands run concurrently within one tick
    #[serde(default = "default_max_parallel")]
    pub max_parallel: usize,

    /// Program invoked as `<shell> -c <command>`
    #[serde(default = "default_shell")]
    pub shell: String,
}

fn default_check_interval() -> u64 {
    defaults::CHECK_INTERVAL_SECS
}

fn default_max_parallel() -> usize {
    defaults::MAX_PARALLEL
}

fn default_shell() -> String {
    defaults::SHELL.to_string()
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            check_interval: default_check_interval(),
            max_parallel: default_max_parallel(),
            shell: default_shell(),
        }
    }
}

impl RunnerConfig {
    /// Load and validate the config file at `path`
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let path = expand_home(path);
        let content = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
            path: path.clone(),
            error: e.to_string(),
        })?;

        Self::from_toml(&content).map_err(|err| match err {
            ConfigError::ParseError { error, .. } => ConfigError::ParseError { path, error },
            ConfigError::InvalidValue { key, message, .. } => {
                ConfigError::InvalidValue { path, key, message }
            }
            other => other,
        })
    }

    /// Parse and validate config file content
    ///
    /// Errors carry an empty path; [`Self::load_from_path`] fills it in.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let file: ConfigFile = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            path: Default::default(),
            error: e.to_string(),
        })?;
        file.command_runner.validate()?;
        Ok(file.command_runner)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.check_interval == 0 {
            return Err(ConfigError::InvalidValue {
                path: Default::default(),
                key: "check_interval",
                message: "must be at least 1 second".to_string(),
            });
        }
        if self.max_parallel == 0 {
            return Err(ConfigError::InvalidValue {
                path: Default::default(),
                key: "max_parallel",
                message: "must be at least 1".to_string(),
            });
        }
        if self.shell.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                path: Default::default(),
                key: "shell",
                message: "cannot be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Sleep between ticks
    pub fn check_interval(&self) -> Duration {
        Duration::from_secs(self.check_interval)
    }
}
