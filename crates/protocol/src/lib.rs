//! # mlp-protocol
//!
//! Shared data models for the ml-pipeline workspace.
//!
//! This crate defines the plain records passed between the configuration
//! layer and the pipeline stages:
//! - Stage configuration entities resolved from `config/config.yaml`
//! - Run reports produced by the pipeline runner
//!
//! ## Modules
//!
//! - [`entity_models`]: One immutable configuration record per stage
//! - [`report_models`]: Stage status and run summaries
//!
//! ## Design Principles
//!
//! - Minimal dependencies: Only serde, uuid and chrono
//! - Independent compilation: No dependencies on other ml-pipeline crates

pub mod entity_models;
pub mod report_models;

// Re-export all public types for convenience
pub use entity_models::*;
pub use report_models::*;
