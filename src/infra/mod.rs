//! Infrastructure layer
//!
//! Handles all I/O operations: the tasks file, external processes and
//! path resolution.

pub mod executor;
pub mod filesystem;
pub mod tasks_store;
