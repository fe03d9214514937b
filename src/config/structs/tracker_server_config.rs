use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct TrackerServerConfig {
    pub enabled: bool,
    pub server_root_url: String,
    pub preferred_port: u16,
    pub announce_interval: u64,
    pub announce_interval_minimum: u64,
    pub peers_timeout: u64,
    pub cleanup_interval: u64,
    pub peers_returned: u64,
    pub threads: u64,
}
