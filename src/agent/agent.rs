use std::sync::Arc;
use log::{info, warn};
use tokio::sync::broadcast;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;
use crate::agent::enums::agent_lifecycle_event::AgentLifecycleEvent;
use crate::agent::structs::agent_configuration::AgentConfiguration;
use crate::agent::structs::current_build_tracker::CurrentBuildTracker;

/// Events buffered per listener before the oldest ones are dropped.
pub const LIFECYCLE_CHANNEL_CAPACITY: usize = 256;

/// Broadcast channel carrying host lifecycle events to the listener.
///
/// `ConfigurationLoaded` must be the first event sent. A listener that lags
/// past the capacity skips events, and a skipped `ConfigurationLoaded` leaves
/// the resolver unbound.
pub fn agent_lifecycle_channel() -> (broadcast::Sender<AgentLifecycleEvent>, broadcast::Receiver<AgentLifecycleEvent>)
{
    broadcast::channel(LIFECYCLE_CHANNEL_CAPACITY)
}

/// Feeds host lifecycle events to the build tracker and the settings resolver
/// until the sending side is dropped.
pub fn spawn_agent_lifecycle_listener(
    configuration: Arc<AgentConfiguration>,
    builds: Arc<CurrentBuildTracker>,
    mut events: broadcast::Receiver<AgentLifecycleEvent>
) -> JoinHandle<()>
{
    tokio::spawn(async move {
        info!("[AGENT] Starting lifecycle listener...");
        loop {
            match events.recv().await {
                Ok(event) => {
                    builds.handle_event(&event);
                    configuration.handle_event(&event);
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!("[AGENT] Lifecycle listener lagged behind, {} events skipped", skipped);
                }
                Err(RecvError::Closed) => {
                    info!("[AGENT] Lifecycle events closed, shutting down listener...");
                    return;
                }
            }
        }
    })
}
