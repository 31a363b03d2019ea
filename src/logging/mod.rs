//! Status reporting
//!
//! Startup and training progress is reported through a [`Reporter`].
//! [`LogReporter`] forwards to the [`log`] facade, whose output is formatted by [`init`].
mod format;
mod metrics;

pub use format::{format_line, init, TIMESTAMP_FORMAT};
pub use metrics::{EvalMetrics, TrainMetrics};

use std::fmt;

/// Log target of general status messages.
pub const TARGET: &str = "hsuanwu";
/// Log target of training metrics.
pub const TRAIN_TARGET: &str = "hsuanwu::train";
/// Log target of evaluation metrics.
pub const EVAL_TARGET: &str = "hsuanwu::eval";

/// Severity or category of a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Error,
    Warn,
    Info,
    Debug,
    /// Training metrics.
    Train,
    /// Evaluation metrics.
    Eval,
}

impl Level {
    /// Fixed-width label shown in the log line.
    pub const fn label(self) -> &'static str {
        use Level::*;
        match self {
            Error => "ERROR",
            Warn => "WARN ",
            Info => "INFO ",
            Debug => "DEBUG",
            Train => "TRAIN",
            Eval => "EVAL ",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Receives status lines.
pub trait Reporter {
    /// Report a message at the given level.
    fn report(&mut self, level: Level, message: fmt::Arguments);

    fn info(&mut self, message: fmt::Arguments) {
        self.report(Level::Info, message)
    }

    fn debug(&mut self, message: fmt::Arguments) {
        self.report(Level::Debug, message)
    }
}

/// Reporter that discards everything
impl Reporter for () {
    fn report(&mut self, _: Level, _: fmt::Arguments) {}
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, level: Level, message: fmt::Arguments) {
        (**self).report(level, message)
    }
}

/// A recorded status line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StatusLine {
    pub level: Level,
    pub message: String,
}

/// Records every line in order.
impl Reporter for Vec<StatusLine> {
    fn report(&mut self, level: Level, message: fmt::Arguments) {
        self.push(StatusLine {
            level,
            message: message.to_string(),
        })
    }
}

/// Reporter that forwards to the global [`log`] logger.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn report(&mut self, level: Level, message: fmt::Arguments) {
        match level {
            Level::Error => log::error!(target: TARGET, "{}", message),
            Level::Warn => log::warn!(target: TARGET, "{}", message),
            Level::Info => log::info!(target: TARGET, "{}", message),
            Level::Debug => log::debug!(target: TARGET, "{}", message),
            Level::Train => log::info!(target: TRAIN_TARGET, "{}", message),
            Level::Eval => log::info!(target: EVAL_TARGET, "{}", message),
        }
    }
}
