use std::sync::Arc;
use std::time::Duration;
use once_cell::sync::OnceCell;
use crate::agent::traits::build_parameter_source::BuildParameterSource;
use crate::agent::traits::remote_channel_factory::RemoteChannelFactory;
use crate::agent::traits::remote_config_channel::RemoteConfigChannel;

/// Resolves the effective torrent settings of an agent.
///
/// Starts unbound. The remote channel is created at most once, by the first
/// `on_configuration_loaded` call carrying a non-empty server URL, and is
/// never replaced afterwards.
pub struct AgentConfiguration {
    pub(crate) build_parameters: Arc<dyn BuildParameterSource>,
    pub(crate) channel_factory: Arc<dyn RemoteChannelFactory>,
    pub(crate) remote: OnceCell<Arc<dyn RemoteConfigChannel>>,
    pub(crate) client_identifier: String,
    pub(crate) connect_timeout: Duration,
    pub(crate) call_timeout: Duration,
}
