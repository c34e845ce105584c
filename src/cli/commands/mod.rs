//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod check;
pub mod create_task;
pub mod list;
pub mod run;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::defaults;

/// Location of the tasks file
#[derive(Args, Debug, Clone)]
pub struct TasksFileArg {
    /// Tasks CSV file
    #[arg(
        long = "tasks-file",
        alias = "tasks_file",
        value_name = "PATH",
        env = defaults::ENV_TASKS_PATH,
        default_value = defaults::TASKS_PATH
    )]
    pub tasks_file: PathBuf,
}

/// Location of the runner config file
#[derive(Args, Debug, Clone)]
pub struct ConfigFileArg {
    /// Runner TOML config file
    #[arg(
        long = "config-file",
        alias = "config_file",
        value_name = "PATH",
        env = defaults::ENV_CONFIG_PATH,
        default_value = defaults::CONFIG_PATH
    )]
    pub config_file: PathBuf,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run tasks on their schedule until interrupted
    Run {
        #[command(flatten)]
        tasks: TasksFileArg,

        #[command(flatten)]
        config: ConfigFileArg,

        /// Run a single tick and exit
        #[arg(long)]
        once: bool,
    },

    /// Append a task to the tasks file, prompting for missing fields
    #[command(alias = "create_task")]
    CreateTask {
        #[command(flatten)]
        tasks: TasksFileArg,

        #[command(flatten)]
        fields: create_task::TaskFields,
    },

    /// List tasks and whether each is active now
    List {
        #[command(flatten)]
        tasks: TasksFileArg,
    },

    /// Validate the config file, the tasks file and the shell
    Check {
        #[command(flatten)]
        tasks: TasksFileArg,

        #[command(flatten)]
        config: ConfigFileArg,
    },
}

impl Commands {
    /// Execute the command
    pub async fn run(self) -> Result<()> {
        match self {
            Self::Run {
                tasks,
                config,
                once,
            } => run::execute(&config.config_file, &tasks.tasks_file, once).await,
            Self::CreateTask { tasks, fields } => {
                create_task::execute(&tasks.tasks_file, fields).await
            }
            Self::List { tasks } => list::execute(&tasks.tasks_file).await,
            Self::Check { tasks, config } => {
                check::execute(&config.config_file, &tasks.tasks_file).await
            }
        }
    }
}
