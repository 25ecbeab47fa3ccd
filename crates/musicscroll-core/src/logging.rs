//! Structured logging for hosts embedding the feed.
//!
//! The feed logs through `tracing`; this module installs a subscriber:
//! - human-readable console output filtered by `RUST_LOG` or the configured level
//! - optional JSON file output with rotation through `tracing-appender`

use std::path::PathBuf;

use tracing::Level;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Crate name as it appears in filter directives.
const CRATE_TARGET: &str = "musicscroll_core";

/// Logging configuration options.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Level for this crate on the console, unless `RUST_LOG` is set.
    pub console_level: Level,
    /// Whether to include ANSI color codes in console output.
    pub console_ansi: bool,
    /// Whether to include file/line info on the console.
    pub include_file_line: bool,
    /// JSON file output; `None` logs to the console only.
    pub file: Option<FileLogging>,
}

/// Rotating JSON log file settings.
#[derive(Debug, Clone)]
pub struct FileLogging {
    /// Directory where log files are stored.
    pub directory: PathBuf,
    /// Log file name prefix ("musicscroll" -> "musicscroll.2026-10-19").
    pub prefix: String,
    /// Level for this crate in the file.
    pub level: Level,
    /// How often to start a new file.
    pub rotation: LogRotation,
}

/// Log rotation frequency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogRotation {
    /// Create a new log file every hour.
    Hourly,
    /// Create a new log file every day.
    Daily,
    /// Never rotate (single log file).
    Never,
}

impl From<LogRotation> for Rotation {
    fn from(rotation: LogRotation) -> Self {
        match rotation {
            LogRotation::Hourly => Self::HOURLY,
            LogRotation::Daily => Self::DAILY,
            LogRotation::Never => Self::NEVER,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::production()
    }
}

impl LoggingConfig {
    /// Verbose console output with every state transition, plus a file.
    #[must_use]
    pub fn development() -> Self {
        Self {
            console_level: Level::DEBUG,
            console_ansi: true,
            include_file_line: true,
            file: Some(FileLogging {
                directory: default_log_directory(),
                prefix: "musicscroll".to_string(),
                level: Level::TRACE,
                rotation: LogRotation::Hourly,
            }),
        }
    }

    /// Uploads and config changes only, console only.
    #[must_use]
    pub const fn production() -> Self {
        Self {
            console_level: Level::INFO,
            console_ansi: true,
            include_file_line: false,
            file: None,
        }
    }

    /// Development config in debug builds, production config in release.
    #[must_use]
    pub fn auto() -> Self {
        if cfg!(debug_assertions) {
            Self::development()
        } else {
            Self::production()
        }
    }

    /// Set the console log level.
    #[must_use]
    pub const fn with_console_level(mut self, level: Level) -> Self {
        self.console_level = level;
        self
    }

    /// Write JSON logs into `directory`, rotating daily.
    #[must_use]
    pub fn with_file(mut self, directory: PathBuf) -> Self {
        self.file = Some(FileLogging {
            directory,
            prefix: "musicscroll".to_string(),
            level: Level::DEBUG,
            rotation: LogRotation::Daily,
        });
        self
    }
}

/// Keeps file logging alive. Drop it to flush and close the log file.
pub struct LoggingGuard {
    _file_guard: Option<tracing_appender::non_blocking::WorkerGuard>,
}

/// Install the global subscriber.
///
/// Keep the returned guard for the lifetime of the program.
///
/// # Errors
///
/// Returns an error if the log directory cannot be created or a subscriber
/// is already installed.
pub fn init(config: &LoggingConfig) -> Result<LoggingGuard, LoggingError> {
    let console_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(crate_directive("warn", config.console_level)));

    let console_layer = fmt::layer()
        .with_ansi(config.console_ansi)
        .with_file(config.include_file_line)
        .with_line_number(config.include_file_line)
        .with_filter(console_filter);

    let (file_layer, file_guard) = match &config.file {
        Some(file) => {
            std::fs::create_dir_all(&file.directory).map_err(|e| {
                LoggingError::DirectoryCreationFailed {
                    path: file.directory.clone(),
                    reason: e.to_string(),
                }
            })?;

            let appender =
                RollingFileAppender::new(file.rotation.into(), &file.directory, &file.prefix);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .json()
                .with_filter(EnvFilter::new(crate_directive("info", file.level)));
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Install the subscriber picked by [`LoggingConfig::auto`].
///
/// # Errors
///
/// Returns an error if initialization fails.
pub fn init_auto() -> Result<LoggingGuard, LoggingError> {
    init(&LoggingConfig::auto())
}

/// Get the default log directory.
#[must_use]
pub fn default_log_directory() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("musicscroll")
        .join("logs")
}

/// `"<default>,musicscroll_core=<level>"`
fn crate_directive(default: &str, level: Level) -> String {
    format!("{default},{CRATE_TARGET}={}", level_to_directive(level))
}

/// Convert a tracing Level to a filter directive string.
const fn level_to_directive(level: Level) -> &'static str {
    match level {
        Level::TRACE => "trace",
        Level::DEBUG => "debug",
        Level::INFO => "info",
        Level::WARN => "warn",
        Level::ERROR => "error",
    }
}

/// Errors that can occur during logging initialization.
#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    /// Failed to create the log directory.
    #[error("Failed to create log directory {path}: {reason}")]
    DirectoryCreationFailed {
        /// The path that could not be created.
        path: PathBuf,
        /// The reason for the failure.
        reason: String,
    },

    /// A global subscriber was already installed.
    #[error("Logging already initialized: {0}")]
    AlreadyInitialized(String),
}
