use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use parking_lot::RwLock;
use crate::config::structs::tracker_server_config::TrackerServerConfig;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::tracked_torrent::TrackedTorrent;

#[derive(Debug)]
pub struct TorrentRegistry {
    pub config: Arc<TrackerServerConfig>,
    pub(crate) torrents: RwLock<BTreeMap<InfoHash, TrackedTorrent>>,
    pub(crate) accept_foreign_torrents: AtomicBool,
}
