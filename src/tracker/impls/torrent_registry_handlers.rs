use std::collections::HashMap;
use std::collections::btree_map::Entry;
use std::net::{IpAddr, SocketAddr};
use std::time::Instant;
use log::debug;
use crate::common::structs::custom_error::CustomError;
use crate::tracker::enums::announce_event::AnnounceEvent;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::peer_id::PeerId;
use crate::tracker::structs::torrent_registry::TorrentRegistry;
use crate::tracker::structs::tracked_peer::TrackedPeer;
use crate::tracker::structs::tracked_torrent::TrackedTorrent;

impl TorrentRegistry {
    pub fn validate_announce(&self, remote_addr: IpAddr, query: HashMap<String, Vec<Vec<u8>>>) -> Result<AnnounceQueryRequest, CustomError>
    {
        fn get_required_bytes<'a>(query: &'a HashMap<String, Vec<Vec<u8>>>, field: &str, expected_len: Option<usize>) -> Result<&'a [u8], CustomError> {
            let value = query.get(field)
                .ok_or_else(|| CustomError::new(&format!("missing {}", field)))?
                .first()
                .ok_or_else(|| CustomError::new(&format!("no {} given", field)))?;

            if let Some(len) = expected_len {
                if value.len() != len {
                    return Err(CustomError::new(&format!("invalid {} size", field)));
                }
            }

            Ok(value.as_slice())
        }

        fn parse_integer<T: std::str::FromStr>(query: &HashMap<String, Vec<Vec<u8>>>, field: &str) -> Result<T, CustomError> {
            let bytes = get_required_bytes(query, field, None)?;
            let str_value = std::str::from_utf8(bytes)
                .map_err(|_| CustomError::new(&format!("invalid {}", field)))?;
            str_value.parse::<T>()
                .map_err(|_| CustomError::new(&format!("missing or invalid {}", field)))
        }

        fn first_str<'a>(query: &'a HashMap<String, Vec<Vec<u8>>>, field: &str) -> Option<&'a str> {
            query.get(field)
                .and_then(|v| v.first())
                .and_then(|bytes| std::str::from_utf8(bytes).ok())
        }

        let info_hash = InfoHash::try_from(get_required_bytes(&query, "info_hash", Some(20))?)?;
        let peer_id = PeerId::try_from(get_required_bytes(&query, "peer_id", Some(20))?)?;
        let port_integer = parse_integer::<u16>(&query, "port")?;
        let uploaded_integer = parse_integer::<u64>(&query, "uploaded")?;
        let downloaded_integer = parse_integer::<u64>(&query, "downloaded")?;
        let left_integer = parse_integer::<u64>(&query, "left")?;

        let compact_bool = first_str(&query, "compact")
            .and_then(|s| s.parse::<u8>().ok())
            .map(|v| v == 1)
            .unwrap_or(false);

        let event = match first_str(&query, "event").map(str::to_lowercase).as_deref() {
            Some("started") => AnnounceEvent::Started,
            Some("stopped") => AnnounceEvent::Stopped,
            Some("completed") => AnnounceEvent::Completed,
            _ => AnnounceEvent::None,
        };

        let peers_returned = self.config.peers_returned;
        let numwant_integer = first_str(&query, "numwant")
            .and_then(|s| s.parse::<u64>().ok())
            .map(|v| if v == 0 || v > peers_returned { peers_returned } else { v })
            .unwrap_or(peers_returned);

        Ok(AnnounceQueryRequest {
            info_hash,
            peer_id,
            port: port_integer,
            uploaded: uploaded_integer,
            downloaded: downloaded_integer,
            left: left_integer,
            compact: compact_bool,
            no_peer_id: query.contains_key("no_peer_id"),
            event,
            remote_addr,
            numwant: numwant_integer,
        })
    }

    /// Applies an announce and returns the torrent as it is afterwards.
    #[tracing::instrument(level = "debug", skip(self))]
    pub fn handle_announce(&self, announce: &AnnounceQueryRequest) -> Result<TrackedTorrent, CustomError>
    {
        let accept_foreign = self.accepts_foreign_torrents();
        let mut torrents = self.torrents.write();
        let torrent = match torrents.entry(announce.info_hash) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                if !accept_foreign || announce.event == AnnounceEvent::Stopped {
                    return Err(CustomError::new("unknown info_hash"));
                }
                debug!("[TRACKER] Accepting foreign torrent {}", announce.info_hash);
                entry.insert(TrackedTorrent::new(announce.info_hash))
            }
        };

        let now = Instant::now();
        match announce.event {
            AnnounceEvent::Stopped => {
                debug!("[TRACKER] Removing from infohash {} peerid {}", announce.info_hash, announce.peer_id);
                torrent.peers.remove(&announce.peer_id);
            }
            event => {
                let was_seeding = torrent.peers.get(&announce.peer_id).is_some_and(TrackedPeer::is_seeder);
                debug!("[TRACKER] Adding to infohash {} peerid {}", announce.info_hash, announce.peer_id);
                torrent.peers.insert(announce.peer_id, TrackedPeer {
                    peer_id: announce.peer_id,
                    peer_addr: SocketAddr::new(announce.remote_addr, announce.port),
                    uploaded: announce.uploaded,
                    downloaded: announce.downloaded,
                    left: announce.left,
                    updated: now,
                });
                if event == AnnounceEvent::Completed && !was_seeding {
                    torrent.completed += 1;
                }
            }
        }
        torrent.updated = now;
        Ok(torrent.clone())
    }

    /// Known torrents among `info_hashes`; unknown ones are left out.
    pub fn scrape(&self, info_hashes: &[InfoHash]) -> Vec<TrackedTorrent>
    {
        let torrents = self.torrents.read();
        info_hashes.iter()
            .filter_map(|info_hash| torrents.get(info_hash).cloned())
            .collect()
    }

    pub fn validate_scrape(&self, query: HashMap<String, Vec<Vec<u8>>>) -> Result<Vec<InfoHash>, CustomError>
    {
        let info_hashes = query.get("info_hash")
            .ok_or_else(|| CustomError::new("missing info_hash"))?;
        info_hashes.iter()
            .map(|bytes| InfoHash::try_from(bytes.as_slice()))
            .collect()
    }
}
