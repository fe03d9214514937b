use serde::{Deserialize, Serialize};
use crate::config::structs::agent_config::AgentConfig;
use crate::config::structs::tracker_server_config::TrackerServerConfig;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Configuration {
    pub log_level: String,
    #[serde(default)]
    pub agent: AgentConfig,
    #[serde(default)]
    pub tracker: TrackerServerConfig,
}
