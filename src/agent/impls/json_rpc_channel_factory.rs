use std::sync::Arc;
use std::time::Duration;
use crate::agent::enums::remote_config_error::RemoteConfigError;
use crate::agent::structs::json_rpc_channel::JsonRpcChannel;
use crate::agent::structs::json_rpc_channel_factory::JsonRpcChannelFactory;
use crate::agent::traits::remote_channel_factory::RemoteChannelFactory;
use crate::agent::traits::remote_config_channel::RemoteConfigChannel;

impl RemoteChannelFactory for JsonRpcChannelFactory {
    fn create(
        &self,
        target_url: &str,
        client_identifier: &str,
        timeout: Duration,
        secure: bool,
    ) -> Result<Arc<dyn RemoteConfigChannel>, RemoteConfigError> {
        Ok(Arc::new(JsonRpcChannel::new(target_url, client_identifier, timeout, secure)?))
    }
}
