use std::fmt;
use std::fmt::Formatter;
use std::str::FromStr;
use crate::agent::enums::resolution_tier::ResolutionTier;
use crate::agent::enums::setting_key::SettingKey;
use crate::agent::enums::setting_type::SettingType;
use crate::agent::enums::setting_value::SettingValue;
use crate::common::common::parse_file_size;
use crate::common::structs::custom_error::CustomError;

/// Namespace prefixed to every remote configuration method.
pub const REMOTE_NAMESPACE: &str = "TorrentConfiguration";

pub const DEFAULT_DOWNLOAD_ENABLED: bool = true;
pub const DEFAULT_SEEDING_ENABLED: bool = true;
pub const DEFAULT_MAX_SEEDED_TORRENTS: u32 = 500;
pub const DEFAULT_MIN_SEEDERS_FOR_DOWNLOAD: u32 = 1;
/// Seconds.
pub const DEFAULT_MAX_PIECE_DOWNLOAD_TIME: u32 = 7;
pub const DEFAULT_FILE_SIZE_THRESHOLD: &str = "10mb";
pub const DEFAULT_SOCKET_CONNECTION_TIMEOUT_MILLIS: u64 = 120_000;
pub const DEFAULT_CLEANUP_RUN_TIMEOUT_MILLIS: u64 = 60_000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 8;
pub const DEFAULT_ANNOUNCE_URL: &str = "http://localhost:8111/trackerAnnounce.html";

const BUILD_THEN_REMOTE: &[ResolutionTier] = &[ResolutionTier::BuildParameter, ResolutionTier::RemoteAuthority];
const BUILD_ONLY: &[ResolutionTier] = &[ResolutionTier::BuildParameter];
const REMOTE_ONLY: &[ResolutionTier] = &[ResolutionTier::RemoteAuthority];

fn millis_to_secs(millis: u64) -> u32 {
    u32::try_from(millis / 1000).unwrap_or(u32::MAX)
}

impl SettingKey {
    pub const ALL: [SettingKey; 10] = [
        SettingKey::DownloadEnabled,
        SettingKey::SeedingEnabled,
        SettingKey::MaxSeededTorrents,
        SettingKey::MinSeedersForDownload,
        SettingKey::MaxPieceDownloadTime,
        SettingKey::FileSizeThresholdBytes,
        SettingKey::SocketTimeout,
        SettingKey::CleanupTimeout,
        SettingKey::MaxConnections,
        SettingKey::AnnounceUrl,
    ];

    /// Name of the build shared parameter overriding this setting.
    pub fn parameter_name(&self) -> &'static str {
        match self {
            SettingKey::DownloadEnabled => "download-enabled",
            SettingKey::SeedingEnabled => "seeding-enabled",
            SettingKey::MaxSeededTorrents => "max-seeded-torrents",
            SettingKey::MinSeedersForDownload => "min-seeders-for-download",
            SettingKey::MaxPieceDownloadTime => "max-piece-download-time",
            SettingKey::FileSizeThresholdBytes => "file-size-threshold-bytes",
            SettingKey::SocketTimeout => "socket-timeout",
            SettingKey::CleanupTimeout => "cleanup-timeout",
            SettingKey::MaxConnections => "max-connections",
            SettingKey::AnnounceUrl => "announce-url",
        }
    }

    /// Remote method answering this setting, `None` when the key is never asked remotely.
    pub fn remote_method(&self) -> Option<&'static str> {
        match self {
            SettingKey::DownloadEnabled => Some("isDownloadEnabled"),
            SettingKey::SeedingEnabled => Some("isSeedingEnabled"),
            SettingKey::MaxSeededTorrents => Some("getMaxNumberOfSeededTorrents"),
            SettingKey::MinSeedersForDownload => Some("getMinSeedersForDownload"),
            SettingKey::MaxPieceDownloadTime => Some("getMaxPieceDownloadTime"),
            SettingKey::FileSizeThresholdBytes => None,
            SettingKey::SocketTimeout => Some("getSocketTimeout"),
            SettingKey::CleanupTimeout => Some("getCleanupTimeout"),
            SettingKey::MaxConnections => Some("getMaxConnectionsCount"),
            SettingKey::AnnounceUrl => Some("getAnnounceUrl"),
        }
    }

    /// Fully qualified remote method, `<namespace>.<method>`.
    pub fn remote_method_path(&self) -> Option<String> {
        self.remote_method().map(|method| format!("{}.{}", REMOTE_NAMESPACE, method))
    }

    pub fn setting_type(&self) -> SettingType {
        match self {
            SettingKey::DownloadEnabled | SettingKey::SeedingEnabled => SettingType::Boolean,
            SettingKey::FileSizeThresholdBytes => SettingType::ByteSize,
            SettingKey::AnnounceUrl => SettingType::Text,
            _ => SettingType::Integer,
        }
    }

    /// Sources consulted for this key, highest priority first.
    pub fn resolution_tiers(&self) -> &'static [ResolutionTier] {
        match self {
            SettingKey::FileSizeThresholdBytes => BUILD_ONLY,
            SettingKey::AnnounceUrl => REMOTE_ONLY,
            _ => BUILD_THEN_REMOTE,
        }
    }

    pub fn default_value(&self) -> SettingValue {
        match self {
            SettingKey::DownloadEnabled => SettingValue::Boolean(DEFAULT_DOWNLOAD_ENABLED),
            SettingKey::SeedingEnabled => SettingValue::Boolean(DEFAULT_SEEDING_ENABLED),
            SettingKey::MaxSeededTorrents => SettingValue::Integer(DEFAULT_MAX_SEEDED_TORRENTS),
            SettingKey::MinSeedersForDownload => SettingValue::Integer(DEFAULT_MIN_SEEDERS_FOR_DOWNLOAD),
            SettingKey::MaxPieceDownloadTime => SettingValue::Integer(DEFAULT_MAX_PIECE_DOWNLOAD_TIME),
            // Zero only if DEFAULT_FILE_SIZE_THRESHOLD stops parsing.
            SettingKey::FileSizeThresholdBytes => SettingValue::ByteSize(parse_file_size(DEFAULT_FILE_SIZE_THRESHOLD).unwrap_or(0)),
            SettingKey::SocketTimeout => SettingValue::Integer(millis_to_secs(DEFAULT_SOCKET_CONNECTION_TIMEOUT_MILLIS)),
            SettingKey::CleanupTimeout => SettingValue::Integer(millis_to_secs(DEFAULT_CLEANUP_RUN_TIMEOUT_MILLIS)),
            SettingKey::MaxConnections => SettingValue::Integer(DEFAULT_MAX_CONNECTIONS),
            SettingKey::AnnounceUrl => SettingValue::Text(String::from(DEFAULT_ANNOUNCE_URL)),
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(self.parameter_name())
    }
}

impl FromStr for SettingKey {
    type Err = CustomError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SettingKey::ALL
            .into_iter()
            .find(|key| key.parameter_name() == s)
            .ok_or_else(|| CustomError::new(&format!("unknown setting '{}'", s)))
    }
}
