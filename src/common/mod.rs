//! Common utilities and shared functionality.
//!
//! This module contains helper functions and data structures used by both the
//! agent-side settings resolver and the server-side tracker.
//!
//! # Utilities
//!
//! - Logging setup
//! - Query string parsing
//! - Hex encoding/decoding
//! - Human readable file size parsing (`"500MB"`, `"10 kb"`, ...)
//!
//! # Data Structures
//!
//! - `CustomError` - Simple message carrying error type
//!
//! # Example
//!
//! ```rust,ignore
//! use torrent_artifacts::common::common::{parse_file_size, parse_query};
//!
//! let params = parse_query(Some("info_hash=%ab%cd...&port=6881".to_string()))?;
//! let threshold = parse_file_size("10mb")?;
//! ```

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;

/// Unit tests for the common utilities.
pub mod tests;
