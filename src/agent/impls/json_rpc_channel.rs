use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use async_trait::async_trait;
use serde_json::Value;
use url::Url;
use crate::agent::enums::remote_config_error::RemoteConfigError;
use crate::agent::structs::json_rpc_channel::JsonRpcChannel;
use crate::agent::structs::json_rpc_request::JsonRpcRequest;
use crate::agent::structs::json_rpc_response::JsonRpcResponse;
use crate::agent::traits::remote_config_channel::RemoteConfigChannel;

/// Path of the RPC endpoint below the server root URL.
pub const RPC_PATH: &str = "RPC2";

impl JsonRpcChannel {
    pub fn new(target_url: &str, client_identifier: &str, timeout: Duration, secure: bool) -> Result<JsonRpcChannel, RemoteConfigError> {
        let endpoint = Url::parse(&format!("{}/{}", target_url.trim().trim_end_matches('/'), RPC_PATH))?;
        let client = reqwest::Client::builder()
            .user_agent(client_identifier)
            .connect_timeout(timeout)
            .timeout(timeout)
            .https_only(secure)
            .build()?;

        Ok(JsonRpcChannel {
            client,
            endpoint,
            request_id: AtomicU64::new(1),
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl RemoteConfigChannel for JsonRpcChannel {
    async fn call(&self, method: &str) -> Result<Option<Value>, RemoteConfigError> {
        let request = JsonRpcRequest {
            jsonrpc: "2.0",
            method,
            params: Vec::new(),
            id: self.request_id.fetch_add(1, Ordering::Relaxed),
        };

        let response = self.client
            .post(self.endpoint.clone())
            .json(&request)
            .send()
            .await?
            .error_for_status()?;
        let body = response.bytes().await?;
        let parsed: JsonRpcResponse = serde_json::from_slice(&body)
            .map_err(|e| RemoteConfigError::InvalidResponse(e.to_string()))?;

        if let Some(error) = parsed.error {
            return Err(RemoteConfigError::Rpc { code: error.code, message: error.message });
        }
        Ok(parsed.result.filter(|value| !value.is_null()))
    }
}
