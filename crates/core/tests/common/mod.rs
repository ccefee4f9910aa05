//! Common test utilities and helpers for integration tests.
//!
//! This module provides shared functionality across all integration tests:
//! - Test fixtures (config and params documents, zip archives)
//! - A loopback HTTP server for download tests
//! - Mock stages for runner tests

pub mod fixtures;
pub mod http;
pub mod mock_stages;

#[allow(unused_imports)]
pub use fixtures::*;
#[allow(unused_imports)]
pub use http::*;
#[allow(unused_imports)]
pub use mock_stages::*;
