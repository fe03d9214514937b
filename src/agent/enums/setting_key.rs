use serde::{Deserialize, Serialize};

/// A torrent setting the agent can resolve.
///
/// Each key carries the name it is looked up under in the build's shared
/// parameters, the remote method answering it, its value type and its
/// compiled-in default (see the `impls::setting_key` module).
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
#[serde(rename_all = "kebab-case")]
pub enum SettingKey {
    DownloadEnabled,
    SeedingEnabled,
    MaxSeededTorrents,
    MinSeedersForDownload,
    MaxPieceDownloadTime,
    FileSizeThresholdBytes,
    SocketTimeout,
    CleanupTimeout,
    MaxConnections,
    AnnounceUrl,
}
