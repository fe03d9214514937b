/// Access to the running build's shared parameters.
pub mod build_parameter_source;

/// A bound channel to the remote configuration authority.
pub mod remote_config_channel;

/// Creation of remote configuration channels.
pub mod remote_channel_factory;
