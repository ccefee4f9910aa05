//! # mlp-core
//!
//! Configuration resolution, artifact layout and pipeline stages for
//! ml-pipeline.
//!
//! This crate provides:
//! - Loading of the YAML config and params documents
//! - Idempotent materialization of the artifact directory layout
//! - Typed, per-stage configuration entities
//! - The data ingestion stage and the sequential pipeline runner
//!
//! ## Modules
//!
//! - [`config`]: Document loading and the configuration manager
//! - [`utils`]: Directory, JSON and file-size helpers
//! - [`components`]: Stage work (download, extraction)
//! - [`pipeline`]: Stage trait and runner
//! - [`logging`]: Stdout + file logging for a run
//! - [`constants`]: Default document and log locations

pub mod components;
pub mod config;
pub mod constants;
pub mod logging;
pub mod pipeline;
pub mod utils;
