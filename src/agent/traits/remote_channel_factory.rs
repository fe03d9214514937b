use std::sync::Arc;
use std::time::Duration;
use crate::agent::enums::remote_config_error::RemoteConfigError;
use crate::agent::traits::remote_config_channel::RemoteConfigChannel;

#[cfg_attr(test, mockall::automock)]
pub trait RemoteChannelFactory: Send + Sync {
    fn create(
        &self,
        target_url: &str,
        client_identifier: &str,
        timeout: Duration,
        secure: bool,
    ) -> Result<Arc<dyn RemoteConfigChannel>, RemoteConfigError>;
}
