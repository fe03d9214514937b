use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct AgentConfig {
    /// Root URL of the server acting as remote configuration authority.
    /// Left empty, the agent resolves settings from build parameters and defaults only.
    pub server_url: Option<String>,
    pub client_identifier: String,
    /// Seconds.
    pub rpc_timeout: u64,
}
