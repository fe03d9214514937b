//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// Root configuration structure containing all settings.
pub mod configuration;

/// Agent side settings: remote configuration authority and RPC timeout.
pub mod agent_config;

/// Embedded tracker settings: root URL, preferred port, intervals.
pub mod tracker_server_config;
