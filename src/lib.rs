//! # Torrent Artifacts
//!
//! Peer-assisted distribution of build artifacts over BitTorrent.
//!
//! ## Overview
//!
//! Two cooperating pieces live in this crate:
//!
//! - On build agents, a settings resolver answers every torrent setting
//!   (seeding, leeching, timeouts, connection limits) from the parameters of
//!   the running build, the central server's configuration over JSON-RPC, or
//!   compiled-in defaults, in that order.
//! - On the server, an embedded HTTP BitTorrent tracker is started on a free
//!   local port so agents publishing and fetching artifacts can find each other.
//!
//! ## BEP Compliance
//!
//! The embedded tracker implements:
//! - BEP 3: The BitTorrent Protocol Specification
//! - BEP 23: Tracker Returns Compact Peer Lists
//! - BEP 48: Tracker Protocol Extension: Scrape
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use torrent_artifacts::config::structs::configuration::Configuration;
//! use torrent_artifacts::tracker::structs::embedded_tracker::EmbeddedTracker;
//! use torrent_artifacts::tracker::structs::local_port_allocator::LocalPortAllocator;
//! use torrent_artifacts::tracker::structs::torrent_tracker_manager::TorrentTrackerManager;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! let backend = Arc::new(EmbeddedTracker::new(Arc::new(config.tracker.clone())));
//! let manager = TorrentTrackerManager::from_config(&config.tracker, backend, Arc::new(LocalPortAllocator));
//! let _ = manager.start(&config.tracker.server_root_url).await;
//! ```
//!
//! ## Modules
//!
//! - [`agent`] - Agent side torrent settings resolution
//! - [`common`] - Shared utilities, error handling, and helper functions
//! - [`config`] - Configuration management and TOML parsing
//! - [`http`] - HTTP tracker protocol endpoints
//! - [`structs`] - CLI argument parsing
//! - [`tracker`] - Embedded tracker, its lifecycle and port allocation

/// Agent side settings resolution.
///
/// Resolves torrent settings through build parameters, the remote
/// configuration authority and defaults, and listens to agent lifecycle events.
pub mod agent;

/// Common utilities and shared functionality.
///
/// Contains helper functions for query parsing, hex conversion, byte size
/// parsing, logging setup, and error handling used across all modules.
pub mod common;

/// Configuration management module.
///
/// Handles loading, validation and creation of the TOML configuration file.
pub mod config;

/// HTTP tracker protocol implementation.
///
/// Announce and scrape endpoints served by the embedded tracker.
pub mod http;

/// Command-line interface structures.
pub mod structs;

/// Embedded tracker module.
///
/// Tracked torrents and peers, the actix-web backed tracker, its lifecycle
/// manager and the local port allocator.
pub mod tracker;
