use crate::tracker::structs::cleanup_stats::CleanupStats;

impl CleanupStats {
    pub fn is_empty(&self) -> bool
    {
        self.peers == 0 && self.torrents == 0
    }
}
