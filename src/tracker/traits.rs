//! Collaborator traits of the tracker manager.

/// The tracker implementation started and stopped by the manager.
pub mod tracker_backend;

/// Source of free local ports.
pub mod port_allocator;
