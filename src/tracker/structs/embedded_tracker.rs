use std::sync::Arc;
use parking_lot::Mutex;
use crate::tracker::structs::running_tracker::RunningTracker;
use crate::tracker::structs::torrent_registry::TorrentRegistry;

pub struct EmbeddedTracker {
    pub registry: Arc<TorrentRegistry>,
    pub(crate) running: Mutex<Option<RunningTracker>>,
}
