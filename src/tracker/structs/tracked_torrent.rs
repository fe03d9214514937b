use std::collections::BTreeMap;
use std::time::Instant;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::tracked_peer::TrackedPeer;

#[derive(Clone, Debug)]
pub struct TrackedTorrent {
    pub info_hash: InfoHash,
    pub peers: BTreeMap<PeerId, TrackedPeer>,
    pub completed: u64,
    pub updated: Instant,
}
