use serde::Serialize;

/// Every setting resolved at one point in time.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct ResolvedSettings {
    pub download_enabled: bool,
    pub seeding_enabled: bool,
    pub max_seeded_torrents: u32,
    pub min_seeders_for_download: u32,
    pub max_piece_download_time: u32,
    pub file_size_threshold_bytes: u64,
    pub socket_timeout: u32,
    pub cleanup_timeout: u32,
    pub max_connections: u32,
    pub announce_url: String,
    pub remote_bound: bool,
}
