//! Command-line arguments.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use mlp_core::constants::{CONFIG_FILE_PATH, LOG_DIR, PARAMS_FILE_PATH};
use mlp_core::logging::{LogOptions, LogRotation};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "mlp", version, about = "Configuration-driven ML pipeline runner")]
pub struct Cli {
    /// Pipeline configuration document.
    #[arg(long, global = true, env = "MLP_CONFIG", default_value = CONFIG_FILE_PATH)]
    pub config: PathBuf,

    /// Hyperparameter document.
    #[arg(long, global = true, env = "MLP_PARAMS", default_value = PARAMS_FILE_PATH)]
    pub params: PathBuf,

    /// Directory for the run log file.
    #[arg(long, global = true, default_value = LOG_DIR)]
    pub log_dir: PathBuf,

    /// Log file rotation.
    #[arg(long, global = true, value_enum, default_value_t = RotationArg::Never)]
    pub log_rotation: RotationArg,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log to the file only, not to standard output. Implied by `run --json`.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Run every pipeline stage in order (default).
    Run {
        /// Print the run summary as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Resolve and print the data ingestion configuration.
    ShowConfig,
}

impl Default for Command {
    fn default() -> Self {
        Self::Run { json: false }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RotationArg {
    Never,
    Hourly,
    Daily,
}

impl From<RotationArg> for LogRotation {
    fn from(arg: RotationArg) -> Self {
        match arg {
            RotationArg::Never => LogRotation::Never,
            RotationArg::Hourly => LogRotation::Hourly,
            RotationArg::Daily => LogRotation::Daily,
        }
    }
}

impl Cli {
    /// Standard output is reserved for the JSON summary.
    fn prints_json(&self) -> bool {
        matches!(self.command, Some(Command::Run { json: true }))
    }

    pub fn log_options(&self) -> LogOptions {
        let level = match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        };

        LogOptions {
            log_dir: self.log_dir.clone(),
            level: level.to_string(),
            rotation: self.log_rotation.into(),
            stdout: !self.quiet && !self.prints_json(),
            ..LogOptions::default()
        }
    }
}
