//! Status and debug reporting seam.
//!
//! `Reporter` is the narrow surface the launch engine writes human-readable
//! text through. It is observational only; nothing in the engine reads it
//! back. Production wiring renders to the terminal, tests bind an in-memory
//! log.

use crossterm::style::Stylize;
use tracing::debug;

/// Injectable reporting interface used by the launch engine.
pub trait Reporter: Send + Sync {
    /// Record a user-facing status line.
    fn status(&self, message: &str);
    /// Record diagnostic detail. May be dropped when debug output is off.
    fn debug(&self, message: &str);
}

/// Default terminal binding: status to stderr, debug gated by config.
pub struct TerminalReporter {
    color: bool,
    debug_enabled: bool,
}

impl TerminalReporter {
    pub fn new(color: bool, debug_enabled: bool) -> Self {
        Self {
            color,
            debug_enabled,
        }
    }
}

impl Reporter for TerminalReporter {
    fn status(&self, message: &str) {
        if self.color {
            eprintln!("{} {message}", "status:".cyan());
        } else {
            eprintln!("status: {message}");
        }
    }

    fn debug(&self, message: &str) {
        debug!(target: "applink", "{message}");
        if !self.debug_enabled {
            return;
        }
        if self.color {
            eprintln!("{}", format!("[applink] {message}").dark_grey());
        } else {
            eprintln!("[applink] {message}");
        }
    }
}

/// Reporter that drops everything. Used by one-shot subcommands where status
/// text would pollute machine-readable output.
pub struct NullReporter;

impl Reporter for NullReporter {
    fn status(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
}
