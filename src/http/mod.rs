//! HTTP tracker protocol implementation.
//!
//! Serves the BitTorrent tracker protocol of the embedded tracker as
//! described in BEP 3 (The BitTorrent Protocol Specification), BEP 23
//! (Tracker Returns Compact Peer Lists) and BEP 48 (Tracker Protocol
//! Extension: Scrape).
//!
//! # Supported Endpoints
//!
//! - `/announce` - Handle peer announcements
//! - `/scrape` - Query torrent statistics
//!
//! # Response Format
//!
//! Responses are bencoded dictionaries. Failures are reported with a
//! `failure reason` key and a `200 OK` status, as clients expect.

/// Core HTTP service implementation.
#[allow(clippy::module_inception)]
pub mod http;
