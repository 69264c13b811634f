//! Shared error handling, logging and checksum utilities for the
//! Dictybase knowledge-graph ingest workspace.
//!
//! # Overview
//!
//! - **Error Handling**: the [`DictyError`] type and [`Result`] alias
//! - **Logging**: `tracing` subscriber setup shared by all binaries
//! - **Checksums**: SHA-256 fingerprinting of downloaded source files

#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod checksum;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use error::{DictyError, Result};
