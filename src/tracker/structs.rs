//! Data structures for the embedded tracker.

/// 20-byte torrent info hash identifier.
///
/// A wrapper around `[u8; 20]` usable as a map key, printed and
/// (de)serialized as 40 lowercase hex characters.
pub mod info_hash;

/// 20-byte peer identifier sent by BitTorrent clients.
pub mod peer_id;

/// A single peer of a tracked torrent.
pub mod tracked_peer;

/// A tracked torrent with its peers and completion count.
pub mod tracked_torrent;

/// Address and announce URL of a started tracker.
pub mod tracker_endpoint;

/// Announce request query parameters.
///
/// The validated form of the query string of an announce request.
pub mod announce_query_request;

/// Counts of peers and torrents dropped by one housekeeping pass.
pub mod cleanup_stats;

/// Tracked torrents shared between the tracker and its HTTP handlers.
pub mod torrent_registry;

/// actix-web backed tracker.
pub mod embedded_tracker;

/// Handles of a started embedded tracker.
pub mod running_tracker;

/// Lifecycle manager around a tracker backend.
pub mod torrent_tracker_manager;

/// Port allocator probing local TCP ports.
pub mod local_port_allocator;
