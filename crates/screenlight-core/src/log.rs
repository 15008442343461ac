//! Diagnostic logger with a console sink and an optional rotating file.
//!
//! Nothing is written until [`init`] runs. The console sink is enabled by
//! the `--verbose` flag and prints everything from DEBUG up to stderr. The
//! file sink writes to `~/.config/screenlight/logs/screenlight.log` and is
//! rotated to `screenlight.log.1` (one backup kept) once it exceeds the
//! configured size.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::{Mutex, OnceLock};

use serde::{Deserialize, Serialize};

static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();

const LOG_FILE_NAME: &str = "screenlight.log";
const BACKUP_FILE_NAME: &str = "screenlight.log.1";

/// File logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Whether file logging is enabled. Defaults to `false`.
    pub enabled: bool,
    /// Minimum log level: "debug", "info", "warn", or "error".
    pub level: String,
    /// Maximum log file size in megabytes before rotation.
    pub max_file_mb: u64,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".into(),
            max_file_mb: 10,
        }
    }
}

/// Log severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warn => "WARN",
            Self::Error => "ERROR",
        }
    }

    /// Parses a level name, defaulting to `Info` for anything unknown.
    pub fn parse(s: &str) -> Self {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Self::Debug,
            "warn" => Self::Warn,
            "error" => Self::Error,
            _ => Self::Info,
        }
    }
}

struct FileSink {
    file: File,
    path: PathBuf,
    min_level: Level,
    max_bytes: u64,
    written: u64,
}

struct Logger {
    console: bool,
    file: Option<FileSink>,
}

/// Initialises the global logger. Call once at startup.
///
/// Does nothing if neither `verbose` nor `config.enabled` is set, which
/// leaves every log macro a no-op.
pub fn init(config: &LogConfig, verbose: bool) {
    let file = if config.enabled {
        open_file_sink(config)
    } else {
        None
    };
    if !verbose && file.is_none() {
        return;
    }
    let _ = LOGGER.set(Mutex::new(Logger {
        console: verbose,
        file,
    }));
}

/// Returns whether any sink is active.
pub fn is_enabled() -> bool {
    LOGGER.get().is_some()
}

fn open_file_sink(config: &LogConfig) -> Option<FileSink> {
    let log_dir = crate::config::config_dir()?.join("logs");
    let _ = fs::create_dir_all(&log_dir);
    let path = log_dir.join(LOG_FILE_NAME);

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;
    let written = file.metadata().map(|m| m.len()).unwrap_or(0);

    Some(FileSink {
        file,
        path,
        min_level: Level::parse(&config.level),
        max_bytes: config.max_file_mb * 1024 * 1024,
        written,
    })
}

/// Writes a log line to every sink that accepts `level`.
pub fn write(level: Level, args: fmt::Arguments<'_>) {
    let Some(mutex) = LOGGER.get() else {
        return;
    };
    let Ok(mut logger) = mutex.lock() else {
        return;
    };
    let line = format_line(&timestamp(), level, args);

    if logger.console {
        let _ = std::io::stderr().write_all(line.as_bytes());
    }
    if let Some(sink) = logger.file.as_mut()
        && level >= sink.min_level
    {
        let _ = sink.file.write_all(line.as_bytes());
        sink.written += line.len() as u64;
        if sink.max_bytes > 0 && sink.written >= sink.max_bytes {
            sink.rotate();
        }
    }
}

fn format_line(time: &str, level: Level, args: fmt::Arguments<'_>) -> String {
    format!("{time} [{lvl}] {args}\n", lvl = level.as_str())
}

impl FileSink {
    fn rotate(&mut self) {
        let backup = self.path.with_file_name(BACKUP_FILE_NAME);
        let _ = fs::rename(&self.path, &backup);
        if let Ok(f) = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
        {
            self.file = f;
        }
        self.written = 0;
    }
}

/// UTC wall-clock time as `HH:MM:SS`.
fn timestamp() -> String {
    let dur = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    let secs = dur.as_secs();
    let (h, m, s) = (secs / 3600 % 24, secs / 60 % 60, secs % 60);
    format!("{h:02}:{m:02}:{s:02}")
}

/// Logs at DEBUG level.
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Debug, format_args!($($arg)*)) };
}

/// Logs at INFO level.
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Info, format_args!($($arg)*)) };
}

/// Logs at WARN level.
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Warn, format_args!($($arg)*)) };
}

/// Logs at ERROR level.
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => { $crate::log::write($crate::log::Level::Error, format_args!($($arg)*)) };
}
