//! Logging utilities with colored output.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` / `debug_do!` for output that only appears with `--verbose`
//!
//! Messages go to stderr so that JSON printed by `list`/`show` stays clean
//! on stdout.
//!
//! # Example
//!
//! ```ignore
//! log!("build"; "catalogued {} images", count);
//! debug!("scan"; "skipping {}", path.display());
//! ```

use crossterm::{
    execute,
    terminal::{Clear, ClearType},
};
use owo_colors::OwoColorize;
use std::{
    io::{IsTerminal, Write, stderr},
    sync::atomic::{AtomicBool, Ordering},
};

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

/// Execute code only when --verbose is enabled
///
/// Use this to avoid computing expensive debug data when not needed.
///
/// # Usage
/// ```ignore
/// debug_do! {
///     let summary = expensive_computation();
///     debug!("module"; "result: {:?}", summary);
/// }
/// ```
#[macro_export]
macro_rules! debug_do {
    ($($body:tt)*) => {{
        if $crate::logger::is_verbose() {
            $($body)*
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Write `[module] message` to stderr.
pub fn log(module: &str, message: &str) {
    let prefix = colorize_prefix(module);

    let mut stderr = stderr().lock();
    let is_terminal = stderr.is_terminal();
    write_line(&mut stderr, is_terminal, &format!("{prefix} {message}"));
}

/// Write one log line, clearing leftovers of the previous line on a terminal.
fn write_line(out: &mut impl Write, clear: bool, line: &str) {
    if clear {
        execute!(out, Clear(ClearType::UntilNewLine)).ok();
    }
    writeln!(out, "{line}").ok();
    out.flush().ok();
}

/// Prefix color by module: problems in red/yellow, progress in blue/green.
fn colorize_prefix(module: &str) -> String {
    let prefix = format!("[{module}]");
    match module.to_ascii_lowercase().as_str() {
        "build" => prefix.bright_blue().bold().to_string(),
        "scan" => prefix.bright_green().bold().to_string(),
        "error" => prefix.bright_red().bold().to_string(),
        "warning" => prefix.bright_yellow().bold().to_string(),
        _ => prefix.bright_cyan().bold().to_string(),
    }
}

// ============================================================================
// Tests
// ============================================================================
