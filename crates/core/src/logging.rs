//! Run logging.
//!
//! Every event goes to standard output and to a log file under the run's log
//! directory. The subscriber is installed by the binary through
//! [`init_logging`]; library code only emits `tracing` events, so tests and
//! embedders that never call it get no global logging side effects.

use crate::constants::{LOG_DIR, LOG_FILE_NAME};
use crate::utils::{create_directories, FsError};
use std::io::IsTerminal;
use std::path::PathBuf;
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// How often the log file is rolled over.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogRotation {
    /// Append to a single file.
    #[default]
    Never,
    Hourly,
    Daily,
}

/// Where and how much to log.
#[derive(Debug, Clone)]
pub struct LogOptions {
    pub log_dir: PathBuf,
    pub file_name: String,
    /// Filter directive used when `RUST_LOG` is not set (e.g. `info`).
    pub level: String,
    pub rotation: LogRotation,
    /// Also write to standard output. Colour is only used when it is a
    /// terminal.
    pub stdout: bool,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from(LOG_DIR),
            file_name: LOG_FILE_NAME.to_string(),
            level: "info".to_string(),
            rotation: LogRotation::Never,
            stdout: true,
        }
    }
}

/// Errors that can occur while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error(transparent)]
    Fs(#[from] FsError),

    #[error("Invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    #[error("Failed to install logger: {0}")]
    Install(#[from] tracing_subscriber::util::TryInitError),
}

/// Keeps the background log writer alive. Buffered events are flushed when
/// it is dropped, so hold it until the run ends.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggingGuard {
    _file: WorkerGuard,
}

/// Install the stdout + file subscriber for this run.
///
/// # Errors
///
/// Fails if the log directory cannot be created, the filter does not parse,
/// or a global subscriber is already installed.
pub fn init_logging(options: &LogOptions) -> Result<LoggingGuard, LoggingError> {
    create_directories(&[&options.log_dir], false)?;

    let appender = match options.rotation {
        LogRotation::Never => rolling::never(&options.log_dir, &options.file_name),
        LogRotation::Hourly => rolling::hourly(&options.log_dir, &options.file_name),
        LogRotation::Daily => rolling::daily(&options.log_dir, &options.file_name),
    };
    let (file_writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&options.level))?;

    let file_layer = fmt::layer().with_writer(file_writer).with_ansi(false);
    let stdout_layer = options.stdout.then(|| {
        fmt::layer()
            .with_writer(std::io::stdout)
            .with_ansi(std::io::stdout().is_terminal())
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()?;

    tracing::info!(log_dir = %options.log_dir.display(), "Logging is configured successfully!");
    Ok(LoggingGuard { _file: guard })
}
