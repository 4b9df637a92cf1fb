use std::path::Path;

use anyhow::Result;
use chrono::SecondsFormat;
use colored::{ColoredString, Colorize};
use fern::Dispatch;
use log::{Level, LevelFilter};

/// Verbosity level for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Error messages only
    Error,
    /// Warning and error messages
    Warning,
    /// Progress lines, warnings and errors (default)
    Info,
    /// Also every text file that gets inverted
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert verbosity level to log::LevelFilter
    pub fn to_level_filter(&self) -> LevelFilter {
        match self {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }

    /// Get the verbosity level from the number of `-v` flags
    pub fn from_occurrences(occurrences: u8) -> Self {
        match occurrences {
            0 => LogLevel::Info,
            1 => LogLevel::Debug,
            _ => LogLevel::Trace,
        }
    }
}

/// Initialise the logger
///
/// Progress lines go to stdout as bare messages, so piped output can be
/// parsed line by line. On a terminal, warnings, errors and debug lines
/// are tinted. When `log_file` is given the same messages are appended to
/// it with a timestamp, level and target.
pub fn init_logger(verbosity: LogLevel, log_file: Option<&Path>) -> Result<()> {
    let base_logger = Dispatch::new()
        .level(verbosity.to_level_filter())
        .chain(console_sink(atty::is(atty::Stream::Stdout)));

    let base_logger = match log_file {
        Some(path) => base_logger.chain(file_sink(path)?),
        None => base_logger,
    };
    base_logger.apply()?;

    log::debug!("Logger initialized with verbosity level: {verbosity:?}");

    Ok(())
}

fn console_sink(styled: bool) -> Dispatch {
    Dispatch::new()
        .format(move |out, message, record| {
            if styled {
                out.finish(format_args!("{}", tint(record.level(), &message.to_string())))
            } else {
                out.finish(format_args!("{message}"))
            }
        })
        .chain(std::io::stdout())
}

fn file_sink(path: &Path) -> Result<Dispatch> {
    Ok(Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                chrono::Local::now().to_rfc3339_opts(SecondsFormat::Secs, true),
                record.level(),
                record.target(),
                message
            ))
        })
        .chain(fern::log_file(path)?))
}

/// Terminal style of a log line; progress lines stay untouched
fn tint(level: Level, line: &str) -> ColoredString {
    match level {
        Level::Error => line.red().bold(),
        Level::Warn => line.yellow(),
        Level::Info => line.normal(),
        Level::Debug | Level::Trace => line.dimmed(),
    }
}

/// Format a message with colour support
///
/// The coloured variant is only used when stdout is a terminal.
pub fn format_message(message: &str, colored_message: &str) -> String {
    if atty::is(atty::Stream::Stdout) {
        colored_message.to_string()
    } else {
        message.to_string()
    }
}
