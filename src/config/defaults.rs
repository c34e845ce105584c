//! Default configuration values

/// Runner config file location
pub const CONFIG_PATH: &str = "/etc/command_runner/command_runner.toml";

/// Tasks file location
pub const TASKS_PATH: &str = "/etc/command_runner/tasks.csv";

/// Environment variable overriding [`CONFIG_PATH`]
pub const ENV_CONFIG_PATH: &str = "COMMAND_RUNNER_CONFIG";

/// Environment variable overriding [`TASKS_PATH`]
pub const ENV_TASKS_PATH: &str = "COMMAND_RUNNER_TASKS";

/// Seconds between scheduler ticks
pub const CHECK_INTERVAL_SECS: u64 = 60;

/// Commands run concurrently per tick
pub const MAX_PARALLEL: usize = 4;

/// Shell used to run task commands
pub const SHELL: &str = "sh";
