//! Output formatting
//!
//! Process-wide output mode (quiet, JSON, verbose) and helpers for
//! consistently prefixed status messages.

use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

static QUIET: AtomicBool = AtomicBool::new(false);
static JSON: AtomicBool = AtomicBool::new(false);
static VERBOSE: AtomicU8 = AtomicU8::new(0);

/// Output mode selected by global CLI flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Only errors are printed
    pub quiet: bool,
    /// Machine-readable output
    pub json: bool,
    /// Verbosity level (count of `-v`)
    pub verbose: u8,
}

impl OutputConfig {
    pub fn new(quiet: bool, json: bool, verbose: u8) -> Self {
        Self {
            quiet,
            json,
            verbose,
        }
    }

    /// Make this the process-wide output mode
    pub fn apply_global(self) {
        QUIET.store(self.quiet, Ordering::Relaxed);
        JSON.store(self.json, Ordering::Relaxed);
        VERBOSE.store(self.verbose, Ordering::Relaxed);
    }
}

/// Whether quiet mode is active
pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Whether JSON output is active
pub fn is_json() -> bool {
    JSON.load(Ordering::Relaxed)
}

/// Current verbosity level
pub fn verbosity() -> u8 {
    VERBOSE.load(Ordering::Relaxed)
}

/// Whether human-readable progress should be printed
fn chatty() -> bool {
    !is_quiet() && !is_json()
}

/// Print a success message
pub fn print_success(message: &str) {
    if chatty() {
        println!("{} {message}", status::SUCCESS);
    }
}

/// Print an informational message
pub fn print_info(message: &str) {
    if chatty() {
        println!("{} {message}", status::INFO);
    }
}

/// Print a warning to stderr
pub fn print_warning(message: &str) {
    if !is_quiet() {
        eprintln!("{} {message}", status::WARNING);
    }
}

/// Print an indented detail line
pub fn print_detail(message: &str) {
    if chatty() {
        println!("  {message}");
    }
}

/// Print a plain line
pub fn print_line(message: &str) {
    if chatty() {
        println!("{message}");
    }
}

/// Print an error and its causes to stderr
pub fn display_error(error: &anyhow::Error) {
    eprintln!("{} {error}", status::ERROR);
    for cause in error.chain().skip(1) {
        eprintln!("  Caused by: {cause}");
    }
}

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";
}
