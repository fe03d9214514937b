/// The settings resolver.
pub mod agent_configuration;

/// Shared parameters of the build currently running on the agent.
pub mod current_build_tracker;

/// JSON-RPC over HTTP remote configuration channel.
pub mod json_rpc_channel;

/// Factory binding [`json_rpc_channel::JsonRpcChannel`] instances.
pub mod json_rpc_channel_factory;

/// JSON-RPC request envelope.
pub mod json_rpc_request;

/// JSON-RPC response envelope and error object.
pub mod json_rpc_response;

/// Serializable snapshot of every resolved setting.
pub mod resolved_settings;
