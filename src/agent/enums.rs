/// Identifier of every resolvable torrent setting.
pub mod setting_key;

/// Declared value type of a setting.
pub mod setting_type;

/// A resolved, typed setting value.
pub mod setting_value;

/// Sources consulted while resolving a setting, in priority order.
pub mod resolution_tier;

/// Notifications delivered by the host agent process.
pub mod agent_lifecycle_event;

/// Failures of the remote configuration channel.
pub mod remote_config_error;
