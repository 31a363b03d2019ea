//! Log line format
use super::{Level, EVAL_TARGET, TRAIN_TARGET};
use chrono::{Local, NaiveDateTime};
use env_logger::{Builder, Env, Target, WriteStyle};
use log::{Record, SetLoggerError};
use std::fmt;
use std::io::{self, IsTerminal, Write};
use yansi::Paint;

/// Timestamp format of log lines, e.g. `08/04/2023 02:19:06 PM`.
pub const TIMESTAMP_FORMAT: &str = "%m/%d/%Y %I:%M:%S %p";

/// Filter used when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "hsuanwu=debug";

/// Install the global logger, writing `[<time>] - [HSUANWU <LEVEL>] - <message>` to stdout.
///
/// # Args
/// * `color` - Colour the level label. Ignored when stdout is not a terminal.
pub fn init(color: bool) -> Result<(), SetLoggerError> {
    let color = use_color(color, io::stdout().is_terminal());
    if !color {
        Paint::disable();
    }
    Builder::from_env(Env::default().default_filter_or(DEFAULT_FILTER))
        .target(Target::Stdout)
        .write_style(if color {
            WriteStyle::Always
        } else {
            WriteStyle::Never
        })
        .format(|buf, record| {
            let level = record_level(record);
            writeln!(
                buf,
                "{}",
                Line(
                    Local::now().format(TIMESTAMP_FORMAT),
                    paint(level),
                    record.args()
                )
            )
        })
        .try_init()
}

const fn use_color(requested: bool, terminal: bool) -> bool {
    requested && terminal
}

/// Format a log line without colour or trailing newline.
pub fn format_line(timestamp: &NaiveDateTime, level: Level, message: &dyn fmt::Display) -> String {
    Line(timestamp.format(TIMESTAMP_FORMAT), level, message).to_string()
}

struct Line<T, L, M>(T, L, M);

impl<T: fmt::Display, L: fmt::Display, M: fmt::Display> fmt::Display for Line<T, L, M> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{}] - [HSUANWU {}] - {}", self.0, self.1, self.2)
    }
}

/// Status level of a log record; metrics are identified by their target.
fn record_level(record: &Record) -> Level {
    match (record.target(), record.level()) {
        (TRAIN_TARGET, _) => Level::Train,
        (EVAL_TARGET, _) => Level::Eval,
        (_, log::Level::Error) => Level::Error,
        (_, log::Level::Warn) => Level::Warn,
        (_, log::Level::Info) => Level::Info,
        (_, log::Level::Debug | log::Level::Trace) => Level::Debug,
    }
}

fn paint(level: Level) -> Paint<&'static str> {
    let label = level.label();
    match level {
        Level::Error => Paint::red(label).bold(),
        Level::Warn => Paint::yellow(label),
        Level::Info => Paint::green(label),
        Level::Debug => Paint::cyan(label),
        Level::Train => Paint::fixed(221, label),
        Level::Eval => Paint::magenta(label),
    }
}
