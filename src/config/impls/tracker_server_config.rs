use std::time::Duration;
use crate::config::structs::tracker_server_config::TrackerServerConfig;

pub const DEFAULT_TRACKER_PORT: u16 = 6969;

impl Default for TrackerServerConfig {
    fn default() -> Self {
        TrackerServerConfig {
            enabled: true,
            server_root_url: String::from("http://localhost:8111/"),
            preferred_port: DEFAULT_TRACKER_PORT,
            announce_interval: 60,
            announce_interval_minimum: 30,
            peers_timeout: 180,
            cleanup_interval: 60,
            peers_returned: 72,
            threads: 2,
        }
    }
}

impl TrackerServerConfig {
    pub fn peers_timeout(&self) -> Duration {
        Duration::from_secs(self.peers_timeout)
    }

    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval)
    }
}
