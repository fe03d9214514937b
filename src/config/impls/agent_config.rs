use crate::config::structs::agent_config::AgentConfig;

pub const DEFAULT_CLIENT_IDENTIFIER: &str = "Artifact Torrent Agent";
pub const DEFAULT_RPC_TIMEOUT: u64 = 30;

impl Default for AgentConfig {
    fn default() -> Self {
        AgentConfig {
            server_url: None,
            client_identifier: String::from(DEFAULT_CLIENT_IDENTIFIER),
            rpc_timeout: DEFAULT_RPC_TIMEOUT,
        }
    }
}

impl AgentConfig {
    /// The configured server URL, with blank values treated as absent.
    pub fn server_url(&self) -> Option<&str> {
        self.server_url.as_deref().map(str::trim).filter(|url| !url.is_empty())
    }
}
