#[derive(PartialEq, Eq, Clone, Copy, Debug, Default)]
pub struct CleanupStats {
    pub peers: u64,
    pub torrents: u64,
}
