/// AgentConfiguration: binding, resolution chain and typed accessors.
pub mod agent_configuration;

/// CurrentBuildTracker: build start/finish handling and parameter lookup.
pub mod current_build_tracker;

/// JsonRpcChannel: construction and the remote call.
pub mod json_rpc_channel;

/// JsonRpcChannelFactory: RemoteChannelFactory implementation.
pub mod json_rpc_channel_factory;

/// SettingKey: names, tiers and compiled-in defaults.
pub mod setting_key;

/// SettingType: parsing of build parameters and validation of remote values.
pub mod setting_type;

/// SettingValue: Display and typed conversions.
pub mod setting_value;
