use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use log::{debug, info};
use parking_lot::RwLock;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use crate::config::structs::tracker_server_config::TrackerServerConfig;
use crate::tracker::structs::cleanup_stats::CleanupStats;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::torrent_registry::TorrentRegistry;
use crate::tracker::structs::tracked_torrent::TrackedTorrent;

impl TorrentRegistry {
    pub fn new(config: Arc<TrackerServerConfig>) -> TorrentRegistry
    {
        TorrentRegistry {
            config,
            torrents: RwLock::new(BTreeMap::new()),
            accept_foreign_torrents: AtomicBool::new(false),
        }
    }

    pub fn accepts_foreign_torrents(&self) -> bool
    {
        self.accept_foreign_torrents.load(Ordering::SeqCst)
    }

    pub fn set_accept_foreign_torrents(&self, accept: bool)
    {
        self.accept_foreign_torrents.store(accept, Ordering::SeqCst);
    }

    /// Starts tracking `info_hash`. Returns `false` when it was already tracked.
    pub fn track(&self, info_hash: InfoHash) -> bool
    {
        let mut torrents = self.torrents.write();
        if torrents.contains_key(&info_hash) {
            return false;
        }
        debug!("[TRACKER] Tracking torrent {}", info_hash);
        torrents.insert(info_hash, TrackedTorrent::new(info_hash));
        true
    }

    pub fn remove(&self, info_hash: &InfoHash) -> Option<TrackedTorrent>
    {
        let removed = self.torrents.write().remove(info_hash);
        if removed.is_some() {
            debug!("[TRACKER] Removed torrent {}", info_hash);
        }
        removed
    }

    pub fn get(&self, info_hash: &InfoHash) -> Option<TrackedTorrent>
    {
        self.torrents.read().get(info_hash).cloned()
    }

    pub fn tracked_torrents(&self) -> Vec<TrackedTorrent>
    {
        self.torrents.read().values().cloned().collect()
    }

    pub fn len(&self) -> usize
    {
        self.torrents.read().len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.torrents.read().is_empty()
    }

    pub fn clear(&self)
    {
        self.torrents.write().clear();
    }

    /// Drops peers not seen within `peers_timeout`, then torrents left without peers.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn cleanup(&self, peers_timeout: Duration) -> CleanupStats
    {
        let now = Instant::now();
        let mut stats = CleanupStats::default();
        let mut torrents = self.torrents.write();
        for torrent in torrents.values_mut() {
            let before = torrent.peers.len();
            torrent.peers.retain(|_, peer| now.duration_since(peer.updated) < peers_timeout);
            stats.peers += (before - torrent.peers.len()) as u64;
        }
        let before = torrents.len();
        torrents.retain(|_, torrent| !torrent.peers.is_empty());
        stats.torrents = (before - torrents.len()) as u64;
        stats
    }

    pub fn spawn_housekeeping(self: &Arc<Self>, mut shutdown: watch::Receiver<bool>) -> JoinHandle<()>
    {
        let registry = self.clone();
        let period = registry.config.cleanup_interval().max(Duration::from_secs(1));
        tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let stats = registry.cleanup(registry.config.peers_timeout());
                        if !stats.is_empty() {
                            info!("[TRACKER] Cleanup removed {} peers and {} torrents", stats.peers, stats.torrents);
                        }
                    }
                    _ = shutdown.changed() => {
                        debug!("[TRACKER] Housekeeping stopped");
                        return;
                    }
                }
            }
        })
    }
}
