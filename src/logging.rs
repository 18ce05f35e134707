//! Tagged event logging with level-filtered console output and an
//! unfiltered optional file sink.
//!
//! Console output is filtered by a [`LogLevel`] threshold and colorized per
//! level when the terminal supports it; the log file, when enabled, always
//! receives the full record regardless of console verbosity. Interactive
//! prompts go through [`Logger::always_to_console`] so they reach the user
//! at any verbosity.

use std::fs::File;
use std::io::{self, IsTerminal, LineWriter, Write};
use std::path::Path;
use std::sync::Mutex;

/// Category of a log record, used for tagging and level mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// General informational message
    Info,
    /// Successfully completed operation
    Success,
    /// File was copied
    Copied,
    /// Existing file was overwritten
    Overwritten,
    /// File or operation was intentionally skipped
    Skipped,
    /// File or folder was deleted
    Deleted,
    /// User intervention required (overwrite prompt)
    Conflict,
    /// Operation was aborted by the user
    Aborted,
    /// Error encountered during execution
    Error,
    /// Record of user-entered prompt input
    UserInput,
}

impl EventKind {
    fn label(self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Copied => "Copied",
            Self::Overwritten => "Overwritten",
            Self::Skipped => "Skipped",
            Self::Deleted => "Deleted",
            Self::Conflict => "Conflict",
            Self::Aborted => "Aborted",
            Self::Error => "Error",
            Self::UserInput => "UserInput",
        }
    }

    /// Verbosity level an event of this kind is filtered at.
    #[must_use]
    pub fn level(self) -> LogLevel {
        match self {
            Self::Error => LogLevel::Error,
            Self::Conflict => LogLevel::Warning,
            Self::Success
            | Self::Copied
            | Self::Overwritten
            | Self::Skipped
            | Self::Deleted
            | Self::Aborted => LogLevel::Standard,
            Self::Info | Self::UserInput => LogLevel::Info,
        }
    }
}

/// Console verbosity threshold, ascending.
///
/// An event is shown on the console when its mapped level is at or above
/// the configured threshold. Note that `Standard` (per-file traffic) sits
/// *below* `Info`, so the default `Info` level shows run-level messages but
/// not every copied file; `--log-level all` or `standard` shows those too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Show everything
    All,
    /// Per-file operational messages (copied, skipped, deleted)
    Standard,
    /// Run-level informational messages (default)
    #[default]
    Info,
    /// Warnings and conflicts
    Warning,
    /// Errors only
    Error,
    /// Suppress all console output
    Off,
}

/// Console colorization switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Colors when stdout is a terminal (default)
    #[default]
    Auto,
    /// Colors regardless of terminal detection
    Always,
    /// Plain text
    Never,
}

/// Event logger with a level-filtered console and an optional file sink.
///
/// The file sink sits behind a mutex purely because the logger is shared by
/// reference through the walk; execution is single-threaded.
///
/// # Example
///
/// ```
/// use prunecopy::{ColorMode, EventKind, LogLevel, Logger};
///
/// let logger = Logger::new(LogLevel::Standard, ColorMode::Never);
/// logger.event(EventKind::Copied, "/out/a.txt");
/// ```
#[derive(Debug)]
pub struct Logger {
    console_level: LogLevel,
    colors: bool,
    file: Option<Mutex<LineWriter<File>>>,
}

impl Logger {
    /// Create a console-only logger.
    #[must_use]
    pub fn new(console_level: LogLevel, color: ColorMode) -> Self {
        let colors = match color {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => io::stdout().is_terminal(),
        };
        Self {
            console_level,
            colors,
            file: None,
        }
    }

    /// Attach a log file. The file receives every event, unfiltered and
    /// uncolored.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be created.
    pub fn with_file(mut self, path: &Path) -> io::Result<Self> {
        let file = File::create(path)?;
        self.file = Some(Mutex::new(LineWriter::new(file)));
        Ok(self)
    }

    /// Whether a file sink is attached.
    #[must_use]
    pub fn has_file(&self) -> bool {
        self.file.is_some()
    }

    /// Log an event: console if the level threshold admits it, file always.
    pub fn event(&self, kind: EventKind, message: &str) {
        if kind.level() >= self.console_level {
            self.print_console(kind, message);
        }
        self.write_file(kind, message);
    }

    /// Log an event to the console regardless of the verbosity threshold
    /// (and to the file as usual). Used for interactive prompts, which must
    /// always reach the user.
    pub fn always_to_console(&self, kind: EventKind, message: &str) {
        self.print_console(kind, message);
        self.write_file(kind, message);
    }

    /// Record an event in the log file only (e.g. raw prompt input).
    pub fn file_only(&self, kind: EventKind, message: &str) {
        self.write_file(kind, message);
    }

    /// Flush the file sink, if any.
    pub fn flush(&self) {
        if let Some(file) = &self.file {
            if let Ok(mut writer) = file.lock() {
                let _ = writer.flush();
            }
        }
    }

    fn print_console(&self, kind: EventKind, message: &str) {
        let tag = format!("[{:<11}]", kind.label());
        if self.colors {
            println!("{}{tag}\x1b[0m {message}", color_code(kind.level()));
        } else {
            println!("{tag} {message}");
        }
    }

    fn write_file(&self, kind: EventKind, message: &str) {
        if let Some(file) = &self.file {
            if let Ok(mut writer) = file.lock() {
                let _ = writeln!(writer, "[{:<11}] {}", kind.label(), message);
            }
        }
    }
}

fn color_code(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "\x1b[1;31m",
        LogLevel::Warning => "\x1b[1;33m",
        LogLevel::Standard => "\x1b[1;34m",
        _ => "\x1b[1;36m",
    }
}
