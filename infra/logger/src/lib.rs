//! # Logger
//!
//! Installs the process-wide `tracing` subscriber for accessor applications.
//! Library crates in the workspace only emit events; binaries call
//! [`Logger::builder`] once at startup and keep the returned [`Logger`] alive.
//!
//! * Console output uses the compact formatter.
//! * File output goes through a non-blocking rolling appender, optionally as JSON.
//! * [`LoggerBuilder::env_filter`] sets programmatic directives
//!   (e.g. `"xacc_namespace=trace"`); `RUST_LOG` is honoured when none are given.
//!
//! ## Example
//!
//! ```rust
//! # use xacc_logger::{Logger, LevelFilter};
//! let _logger = Logger::builder("my-app")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod error;

pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use std::fs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::fmt::layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

const DEFAULT_MAX_FILES: usize = 10;
const LOG_FILE_SUFFIX: &str = "log";

/// File output settings. Output is enabled once `dir` is set; the other
/// settings may be given before or after it.
#[derive(Debug)]
struct FileOutput {
    dir: Option<PathBuf>,
    rotation: Rotation,
    max_files: usize,
    json: bool,
}

/// Builder for the global tracing subscriber.
#[derive(Debug)]
pub struct LoggerBuilder {
    name: String,
    console: bool,
    level: LevelFilter,
    env_filter: Option<String>,
    file: FileOutput,
}

impl LoggerBuilder {
    /// Minimum level emitted when no env filter overrides it.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    /// Adds explicit filter directives (e.g. `xacc_namespace=trace,xacc_object=debug`).
    ///
    /// Invalid directives make [`LoggerBuilder::init`] fail.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn env_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Enables or disables console output.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub const fn console(mut self, enabled: bool) -> Self {
        self.console = enabled;
        self
    }

    /// Writes logs into rolling files under `dir`, prefixed with the logger name.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.file.dir = Some(dir.into());
        self
    }

    /// Rotation strategy for file output.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.file.rotation = rotation;
        self
    }

    /// Number of rotated files to keep.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn max_files(mut self, max: usize) -> Self {
        self.file.max_files = max;
        self
    }

    /// Formats file output as JSON lines.
    #[must_use = "The builder must be configured before it can be used to initialize the logger."]
    pub fn json(mut self, enabled: bool) -> Self {
        self.file.json = enabled;
        self
    }

    /// Installs the global subscriber.
    ///
    /// The returned [`Logger`] owns the background writer guard; drop it only at shutdown.
    ///
    /// # Errors
    /// Returns [`LoggerError::InvalidConfiguration`] for an empty name, zero `max_files`,
    /// bad filter directives, or when no output is enabled.
    /// Returns [`LoggerError::Subscriber`] if a global subscriber is already set.
    pub fn init(self) -> Result<Logger, LoggerError> {
        self.validate()?;
        let filter = self.build_filter()?;

        let mut layers = Vec::new();
        if self.console {
            layers.push(layer().compact().with_ansi(true).boxed());
        }

        let file = self.file;
        let guard = match file.dir {
            Some(dir) => {
                fs::create_dir_all(&dir).map_err(|e| LoggerError::Internal {
                    message: e.to_string().into(),
                    context: Some(format!("Failed to create {}", dir.display()).into()),
                })?;

                let appender = RollingFileAppender::builder()
                    .rotation(file.rotation)
                    .filename_prefix(&self.name)
                    .filename_suffix(LOG_FILE_SUFFIX)
                    .max_log_files(file.max_files)
                    .build(&dir)?;
                let (writer, guard) = tracing_appender::non_blocking(appender);

                let file_layer = layer().with_writer(writer).with_ansi(false);
                layers.push(if file.json { file_layer.json().boxed() } else { file_layer.boxed() });
                Some(guard)
            },
            None => None,
        };

        if layers.is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "No logging output enabled. Enable console or file output.".into(),
                context: None,
            });
        }

        tracing_subscriber::registry().with(filter).with(layers).try_init()?;

        Ok(Logger { guard })
    }

    fn validate(&self) -> Result<(), LoggerError> {
        if self.name.trim().is_empty() {
            return Err(LoggerError::InvalidConfiguration {
                message: "Logger name cannot be empty".into(),
                context: None,
            });
        }
        if self.file.dir.is_some() && self.file.max_files == 0 {
            return Err(LoggerError::InvalidConfiguration {
                message: "max_files must be greater than zero".into(),
                context: None,
            });
        }
        Ok(())
    }

    fn build_filter(&self) -> Result<EnvFilter, LoggerError> {
        let builder = EnvFilter::builder().with_default_directive(self.level.into());
        self.env_filter.as_ref().map_or_else(
            || Ok(builder.from_env_lossy()),
            |directives| {
                builder.parse(directives).map_err(|e| LoggerError::InvalidConfiguration {
                    message: format!("Invalid env filter '{directives}': {e}").into(),
                    context: None,
                })
            },
        )
    }
}

/// Handle to the installed logging system.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Starts configuring the global subscriber. `name` prefixes rolling log files.
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            name: name.into(),
            console: true,
            level: LevelFilter::INFO,
            env_filter: None,
            file: FileOutput {
                dir: None,
                rotation: Rotation::DAILY,
                max_files: DEFAULT_MAX_FILES,
                json: false,
            },
        }
    }

    /// The background writer guard, present only with file output.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}
