use std::collections::BTreeMap;
use std::time::Instant;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::tracked_torrent::TrackedTorrent;

impl TrackedTorrent {
    pub fn new(info_hash: InfoHash) -> TrackedTorrent
    {
        TrackedTorrent {
            info_hash,
            peers: BTreeMap::new(),
            completed: 0,
            updated: Instant::now(),
        }
    }

    pub fn seeders(&self) -> u64
    {
        self.peers.values().filter(|peer| peer.is_seeder()).count() as u64
    }

    pub fn leechers(&self) -> u64
    {
        self.peers.len() as u64 - self.seeders()
    }
}
