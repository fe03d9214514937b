use std::net::SocketAddr;
use std::time::Instant;
use crate::tracker::structs::peer_id::PeerId;

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct TrackedPeer {
    pub peer_id: PeerId,
    pub peer_addr: SocketAddr,
    pub uploaded: u64,
    pub downloaded: u64,
    pub left: u64,
    pub updated: Instant,
}
