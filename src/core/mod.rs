//! Core logic module
//!
//! # Submodules
//!
//! - [`days`] - Weekly activity masks
//! - [`task`] - Task definitions and the "active now" rule
//! - [`config`] - Runner configuration (TOML)
//! - [`runner`] - Scheduling loop
//! - [`check`] - Installation checks

pub mod check;
pub mod config;
pub mod days;
pub mod runner;
pub mod task;
