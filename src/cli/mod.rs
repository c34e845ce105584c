//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no scheduling logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use std::sync::OnceLock;

use anyhow::Result;
use clap::Parser;

use commands::Commands;

/// command-runner - run shell commands on a weekly timetable
///
/// Tasks are read from a CSV file; each one runs inside its time window on
/// the weekdays it is enabled for, at most once per reload interval.
#[derive(Parser, Debug)]
#[command(name = "command-runner")]
#[command(author, version, about, long_about = None)]
#[command(long_version = long_version())]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Execute the CLI command
    pub async fn run(self) -> Result<()> {
        if let Some(cmd) = self.command {
            cmd.run().await
        } else {
            // No subcommand provided, show help
            use clap::CommandFactory;
            let mut cmd = Self::command();
            cmd.print_help()?;
            Ok(())
        }
    }
}

/// Version string with build metadata, when it was captured
fn long_version() -> &'static str {
    static LONG_VERSION: OnceLock<String> = OnceLock::new();
    LONG_VERSION.get_or_init(|| {
        let mut version = env!("CARGO_PKG_VERSION").to_string();
        if let Some(sha) = option_env!("VERGEN_GIT_SHA") {
            version.push_str(&format!("\ncommit: {sha}"));
        }
        if let Some(built) = option_env!("VERGEN_BUILD_TIMESTAMP") {
            version.push_str(&format!("\nbuilt: {built}"));
        }
        if let Some(target) = option_env!("VERGEN_CARGO_TARGET_TRIPLE") {
            version.push_str(&format!("\ntarget: {target}"));
        }
        version
    })
}
