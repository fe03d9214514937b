/// A 20-byte BitTorrent info hash.
///
/// The SHA-1 hash of the "info" dictionary of a torrent, identifying the
/// torrent on the tracker.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct InfoHash(pub [u8; 20]);
