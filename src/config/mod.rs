//! Configuration management module.
//!
//! This module handles loading, parsing, and validating the host process
//! configuration from TOML files.
//!
//! # Configuration Structure
//!
//! The configuration file (`config.toml`) contains:
//! - **log_level**: Logging verbosity (`off`, `error`, `warn`, `info`, `debug`, `trace`)
//! - **agent**: Remote configuration authority settings used by the agent side
//! - **tracker**: Embedded tracker settings used by the server side
//!
//! # Example
//!
//! ```rust,ignore
//! use torrent_artifacts::config::structs::configuration::Configuration;
//!
//! // Load configuration from file, creating it when missing
//! let config = Configuration::load_from_file("config.toml", true)?;
//!
//! // Generate default configuration
//! let default_config = Configuration::init();
//! ```

/// Configuration enumerations (errors).
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;
