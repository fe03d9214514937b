//! Enumerations used by the tracker.

/// Event reported by a peer in an announce request.
pub mod announce_event;

/// Lifecycle state of the tracker manager.
pub mod tracker_state;

/// Errors returned by `TorrentTrackerManager::start`.
pub mod tracker_start_error;

/// Errors returned by a tracker backend.
pub mod tracker_error;
