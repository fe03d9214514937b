use std::sync::Arc;
use parking_lot::RwLock;
use crate::tracker::enums::tracker_state::TrackerState;
use crate::tracker::structs::tracker_endpoint::TrackerEndpoint;
use crate::tracker::traits::port_allocator::PortAllocator;
use crate::tracker::traits::tracker_backend::TrackerBackend;

pub struct TorrentTrackerManager {
    pub(crate) backend: Arc<dyn TrackerBackend>,
    pub(crate) port_allocator: Arc<dyn PortAllocator>,
    pub(crate) preferred_port: u16,
    pub(crate) state: RwLock<TrackerState>,
    pub(crate) endpoint: RwLock<Option<TrackerEndpoint>>,
}
