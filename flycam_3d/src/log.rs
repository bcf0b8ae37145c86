//! Camera diagnostics.
//!
//! Rejected mutations (bounds violations, bad config, degenerate viewports)
//! are reported at ERROR with the call site attached; restriction changes and
//! config I/O are reported at DEBUG/INFO. Everything goes through the
//! process-wide `Logger` held by `Engine`, which prints to the console
//! unless the host application installs its own.

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Sink for camera diagnostics.
///
/// A game usually installs one at startup to forward camera messages into
/// its own log or an in-game console.
///
/// ```no_run
/// use flycam_3d::flycam::log::{Logger, LogEntry, LogSeverity};
///
/// struct RejectionCounter;
///
/// impl Logger for RejectionCounter {
///     fn log(&self, entry: &LogEntry) {
///         if entry.severity == LogSeverity::Error {
///             // count rejected camera mutations...
///         }
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    fn log(&self, entry: &LogEntry);
}

/// One diagnostic message.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub severity: LogSeverity,

    pub timestamp: SystemTime,

    /// Emitting component, `"flycam::Camera"` or `"flycam::CameraConfig"`
    pub source: String,

    pub message: String,

    /// Call site, set only by `engine_error!`
    pub file: Option<&'static str>,
    pub line: Option<u32>,
}

impl LogEntry {
    /// `file:line` of the call site, if recorded.
    pub fn location(&self) -> Option<String> {
        match (self.file, self.line) {
            (Some(file), Some(line)) => Some(format!("{}:{}", file, line)),
            _ => None,
        }
    }
}

/// Message severity, ordered from chattiest to most serious.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    Trace,
    Debug,
    Info,
    Warn,
    /// A camera operation was rejected and left state unchanged
    Error,
}

impl LogSeverity {
    /// Fixed-width tag used in console output.
    pub fn label(self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }

    fn colorize(self) -> ColoredString {
        let label = self.label();
        match self {
            LogSeverity::Trace => label.bright_black(),
            LogSeverity::Debug => label.cyan(),
            LogSeverity::Info => label.green(),
            LogSeverity::Warn => label.yellow(),
            LogSeverity::Error => label.red().bold(),
        }
    }
}

/// Console logger installed until the application replaces it.
///
/// Prints `[local time] [SEVERITY] [source] message`, followed by
/// `(file:line)` for rejected operations. A severity floor lets a release
/// build silence per-frame chatter while keeping rejections visible.
pub struct DefaultLogger {
    min_severity: LogSeverity,
}

impl DefaultLogger {
    pub fn new() -> Self {
        Self { min_severity: LogSeverity::Trace }
    }

    pub fn with_min_severity(min_severity: LogSeverity) -> Self {
        Self { min_severity }
    }

    pub fn min_severity(&self) -> LogSeverity {
        self.min_severity
    }

    /// Whether an entry of `severity` would be printed.
    pub fn accepts(&self, severity: LogSeverity) -> bool {
        severity >= self.min_severity
    }
}

impl Default for DefaultLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        if !self.accepts(entry.severity) {
            return;
        }

        let local: DateTime<Local> = entry.timestamp.into();
        let mut line = format!(
            "[{}] [{}] [{}] {}",
            local.format("%H:%M:%S%.3f"),
            entry.severity.colorize(),
            entry.source.bright_blue(),
            entry.message,
        );
        if let Some(location) = entry.location() {
            line.push_str(&format!(" ({})", location));
        }
        println!("{}", line);
    }
}

// ===== LOGGING MACROS =====

#[doc(hidden)]
#[macro_export]
macro_rules! __engine_log {
    ($severity:ident, $source:expr, $($arg:tt)*) => {
        $crate::flycam::Engine::log(
            $crate::flycam::log::LogSeverity::$severity,
            $source,
            format!($($arg)*)
        )
    };
}

/// Per-call detail, e.g. every integration step.
///
/// ```no_run
/// # use flycam_3d::engine_trace;
/// engine_trace!("flycam::Camera", "step {} ms", 16);
/// ```
#[macro_export]
macro_rules! engine_trace {
    ($source:expr, $($arg:tt)*) => { $crate::__engine_log!(Trace, $source, $($arg)*) };
}

/// State changes such as entering or leaving a confinement box.
#[macro_export]
macro_rules! engine_debug {
    ($source:expr, $($arg:tt)*) => { $crate::__engine_log!(Debug, $source, $($arg)*) };
}

#[macro_export]
macro_rules! engine_info {
    ($source:expr, $($arg:tt)*) => { $crate::__engine_log!(Info, $source, $($arg)*) };
}

#[macro_export]
macro_rules! engine_warn {
    ($source:expr, $($arg:tt)*) => { $crate::__engine_log!(Warn, $source, $($arg)*) };
}

/// Rejected operation; records the call site.
///
/// ```no_run
/// # use flycam_3d::engine_error;
/// engine_error!("flycam::Camera", "position {:?} left the box", (1.0, 2.0, 3.0));
/// ```
#[macro_export]
macro_rules! engine_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::flycam::Engine::log_detailed(
            $crate::flycam::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
