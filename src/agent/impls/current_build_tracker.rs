use std::collections::HashMap;
use log::{debug, info};
use parking_lot::RwLock;
use crate::agent::enums::agent_lifecycle_event::AgentLifecycleEvent;
use crate::agent::structs::current_build_tracker::CurrentBuildTracker;
use crate::agent::traits::build_parameter_source::BuildParameterSource;

impl CurrentBuildTracker {
    pub fn new() -> CurrentBuildTracker {
        CurrentBuildTracker {
            shared_parameters: RwLock::new(None),
        }
    }

    pub fn build_started(&self, shared_parameters: HashMap<String, String>) {
        debug!("[AGENT] Build started with {} shared parameters", shared_parameters.len());
        let previous = self.shared_parameters.write().replace(shared_parameters);
        if previous.is_some() {
            info!("[AGENT] Build started while another build was still tracked, replacing it");
        }
    }

    pub fn build_finished(&self) {
        debug!("[AGENT] Build finished");
        *self.shared_parameters.write() = None;
    }

    pub fn is_build_running(&self) -> bool {
        self.shared_parameters.read().is_some()
    }

    pub fn handle_event(&self, event: &AgentLifecycleEvent) {
        match event {
            AgentLifecycleEvent::BuildStarted { shared_parameters } => self.build_started(shared_parameters.clone()),
            AgentLifecycleEvent::BuildFinished => self.build_finished(),
            AgentLifecycleEvent::ConfigurationLoaded { .. } => {}
        }
    }
}

impl BuildParameterSource for CurrentBuildTracker {
    fn shared_parameter(&self, name: &str) -> Option<String> {
        self.shared_parameters.read().as_ref()?.get(name).cloned()
    }
}
