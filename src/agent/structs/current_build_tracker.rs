use std::collections::HashMap;
use parking_lot::RwLock;

/// Keeps the shared parameters of the build currently running on the agent.
#[derive(Debug, Default)]
pub struct CurrentBuildTracker {
    pub(crate) shared_parameters: RwLock<Option<HashMap<String, String>>>,
}
