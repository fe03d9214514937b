use crate::tracker::structs::tracked_peer::TrackedPeer;

impl TrackedPeer {
    pub fn is_seeder(&self) -> bool
    {
        self.left == 0
    }
}
