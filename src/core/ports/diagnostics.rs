//! Diagnostic sink port
//!
//! Leveled operator-facing messages. Sinks never influence control flow.

use std::fmt;

/// Severity of a diagnostic message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    /// Tracing detail
    Debug,
    /// Something was skipped
    Warn,
    /// A check failed
    Error,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Debug => write!(f, "debug"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Receiver of diagnostic messages
pub trait DiagnosticSink: Send + Sync {
    /// Record a message at the given level
    fn emit(&self, level: Level, message: &str);

    /// Record a debug message
    fn debug(&self, message: &str) {
        self.emit(Level::Debug, message);
    }

    /// Record a warning
    fn warn(&self, message: &str) {
        self.emit(Level::Warn, message);
    }

    /// Record an error
    fn error(&self, message: &str) {
        self.emit(Level::Error, message);
    }
}

/// Sink that forwards to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&self, level: Level, message: &str) {
        match level {
            Level::Debug => log::debug!(target: "constrain::check", "{message}"),
            Level::Warn => log::warn!(target: "constrain::check", "{message}"),
            Level::Error => log::error!(target: "constrain::check", "{message}"),
        }
    }
}
