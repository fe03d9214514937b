//! Embedded BitTorrent tracker and its lifecycle.
//!
//! Artifacts published by builds are distributed over BitTorrent. The server
//! side runs a small HTTP tracker in-process so agents can find each other
//! without any external infrastructure.
//!
//! # Main Components
//!
//! - `TorrentTrackerManager` - Owns the tracker lifecycle (`Stopped`, `Starting`, `Started`)
//! - `EmbeddedTracker` - actix-web backed tracker implementing `TrackerBackend`
//! - `TorrentRegistry` - Tracked torrents and their peers, shared with the HTTP handlers
//! - `LocalPortAllocator` - Finds a bindable port at or above the preferred one
//!
//! # Example
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use torrent_artifacts::tracker::structs::embedded_tracker::EmbeddedTracker;
//! use torrent_artifacts::tracker::structs::local_port_allocator::LocalPortAllocator;
//! use torrent_artifacts::tracker::structs::torrent_tracker_manager::TorrentTrackerManager;
//!
//! let backend = Arc::new(EmbeddedTracker::new(config.tracker.clone()));
//! let manager = TorrentTrackerManager::new(backend, Arc::new(LocalPortAllocator), 6969);
//! if manager.start("http://localhost:8111/").await.is_ok() {
//!     println!("announce on {}", manager.get_announce_uri());
//! }
//! ```

/// Enumerations for tracker state, announce events and errors.
pub mod enums;

/// Implementation blocks for tracker structs.
pub mod impls;

/// Data structures for the tracker, its torrents and peers.
pub mod structs;

/// Seams between the lifecycle manager and its collaborators.
pub mod traits;

/// Unit tests for tracker functionality.
pub mod tests;
