//! Implementation blocks for tracker structs.

pub mod info_hash;
pub mod peer_id;
pub mod tracked_peer;
pub mod tracked_torrent;
pub mod tracker_state;
pub mod cleanup_stats;
pub mod torrent_registry;
pub mod torrent_registry_handlers;
pub mod embedded_tracker;
pub mod torrent_tracker_manager;
pub mod local_port_allocator;
