/// Configuration defaults, loading, saving and validation.
pub mod configuration;

/// Display and Error for ConfigurationError.
pub mod configuration_error;

/// Defaults for the agent section.
pub mod agent_config;

/// Defaults and helpers for the tracker section.
pub mod tracker_server_config;
