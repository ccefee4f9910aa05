//! Small filesystem helpers shared by the configuration layer and stages.
//!
//! - [`create_directories`]: idempotent directory materialization
//! - [`save_json`] / [`load_json`]: pretty JSON persistence
//! - [`get_size`]: human-readable file size

pub mod common;
pub mod error;

pub use common::{create_directories, get_size, load_json, save_json};
pub use error::{FsError, FsResult};
