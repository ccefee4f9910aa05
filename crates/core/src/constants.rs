//! Default locations of the configuration documents, relative to the
//! working directory.

/// Default path of the pipeline configuration document.
pub const CONFIG_FILE_PATH: &str = "config/config.yaml";

/// Default path of the hyperparameter document.
pub const PARAMS_FILE_PATH: &str = "params.yaml";

/// Default directory for the run log file.
pub const LOG_DIR: &str = "logs";

/// Default file name of the run log.
pub const LOG_FILE_NAME: &str = "running_logs.log";
