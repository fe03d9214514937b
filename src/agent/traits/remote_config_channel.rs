use async_trait::async_trait;
use serde_json::Value;
use crate::agent::enums::remote_config_error::RemoteConfigError;

/// A bound channel to the remote configuration authority.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RemoteConfigChannel: Send + Sync {
    /// Invokes the fully qualified `method` without arguments.
    ///
    /// `Ok(None)` means the authority answered with null.
    async fn call(&self, method: &str) -> Result<Option<Value>, RemoteConfigError>;
}
