use std::net::SocketAddr;
use async_trait::async_trait;
use url::Url;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::tracked_torrent::TrackedTorrent;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TrackerBackend: Send + Sync {
    /// Whether announces for torrents never tracked explicitly are accepted.
    fn set_accept_foreign_torrents(&self, accept: bool);

    /// Starts listening on `bind_address`, returning the announce URL.
    async fn start(&self, bind_address: SocketAddr) -> Result<Url, TrackerError>;

    async fn stop(&self);

    fn announce_url(&self) -> Result<Url, TrackerError>;

    fn tracked_torrents(&self) -> Vec<TrackedTorrent>;

    /// Stops tracking `info_hash`; unknown hashes are ignored.
    fn remove(&self, info_hash: &InfoHash);
}
