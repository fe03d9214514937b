use std::collections::HashMap;

/// Notifications the host agent process broadcasts to interested components.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AgentLifecycleEvent {
    /// The agent configuration finished loading. `server_url` may be absent or blank.
    ConfigurationLoaded {
        server_url: Option<String>,
    },
    BuildStarted {
        shared_parameters: HashMap<String, String>,
    },
    BuildFinished,
}
