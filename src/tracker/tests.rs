#[cfg(test)]
mod tracker_tests {
    use std::collections::HashMap;
    use std::net::{IpAddr, Ipv4Addr};
    use std::sync::Arc;
    use crate::config::structs::tracker_server_config::TrackerServerConfig;
    use crate::tracker::structs::info_hash::InfoHash;
    use crate::tracker::structs::peer_id::PeerId;
    use crate::tracker::structs::torrent_registry::TorrentRegistry;

    fn registry() -> TorrentRegistry {
        TorrentRegistry::new(Arc::new(TrackerServerConfig::default()))
    }

    fn announce_query(info_hash: InfoHash, peer_id: PeerId, port: u16, left: u64, event: Option<&str>) -> HashMap<String, Vec<Vec<u8>>> {
        let mut query: HashMap<String, Vec<Vec<u8>>> = HashMap::new();
        query.insert(String::from("info_hash"), vec![info_hash.0.to_vec()]);
        query.insert(String::from("peer_id"), vec![peer_id.0.to_vec()]);
        query.insert(String::from("port"), vec![port.to_string().into_bytes()]);
        query.insert(String::from("uploaded"), vec![b"0".to_vec()]);
        query.insert(String::from("downloaded"), vec![b"0".to_vec()]);
        query.insert(String::from("left"), vec![left.to_string().into_bytes()]);
        if let Some(event) = event {
            query.insert(String::from("event"), vec![event.as_bytes().to_vec()]);
        }
        query
    }

    const LOCALHOST: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

    mod info_hash_tests {
        use std::str::FromStr;
        use crate::tracker::structs::info_hash::InfoHash;

        #[test]
        fn test_info_hash_hex_round_trip() {
            let hex = "0123456789abcdef0123456789abcdef01234567";
            let info_hash = InfoHash::from_str(hex).unwrap();
            assert_eq!(info_hash.0[0], 0x01);
            assert_eq!(info_hash.to_string(), hex);
        }

        #[test]
        fn test_info_hash_rejects_bad_input() {
            assert!(InfoHash::from_str("0123").is_err());
            assert!(InfoHash::from_str("zz23456789abcdef0123456789abcdef01234567").is_err());
            assert!(InfoHash::try_from(&[0u8; 19][..]).is_err());
            assert!(InfoHash::try_from(&[0u8; 20][..]).is_ok());
        }

        #[test]
        fn test_info_hash_serde() {
            let info_hash = InfoHash([0xab; 20]);
            let json = serde_json::to_string(&info_hash).unwrap();
            assert_eq!(json, format!("\"{}\"", "ab".repeat(20)));
            let parsed: InfoHash = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, info_hash);
            assert!(serde_json::from_str::<InfoHash>("\"abcd\"").is_err());
        }
    }

    mod registry_tests {
        use std::time::Duration;
        use crate::tracker::enums::announce_event::AnnounceEvent;
        use crate::tracker::structs::info_hash::InfoHash;
        use crate::tracker::structs::peer_id::PeerId;
        use super::{announce_query, registry, LOCALHOST};

        #[test]
        fn test_track_and_remove() {
            let registry = registry();
            let info_hash = InfoHash([1; 20]);
            assert!(registry.track(info_hash));
            assert!(!registry.track(info_hash));
            assert_eq!(registry.len(), 1);
            assert!(registry.remove(&info_hash).is_some());
            assert!(registry.remove(&info_hash).is_none());
            assert!(registry.is_empty());
        }

        #[test]
        fn test_validate_announce_defaults() {
            let registry = registry();
            let query = announce_query(InfoHash([1; 20]), PeerId([2; 20]), 6881, 10, None);
            let announce = registry.validate_announce(LOCALHOST, query).unwrap();
            assert_eq!(announce.port, 6881);
            assert_eq!(announce.event, AnnounceEvent::None);
            assert!(!announce.compact);
            assert_eq!(announce.numwant, 72);
        }

        #[test]
        fn test_validate_announce_errors() {
            let registry = registry();
            let mut query = announce_query(InfoHash([1; 20]), PeerId([2; 20]), 6881, 10, None);
            query.insert(String::from("info_hash"), vec![vec![1u8; 19]]);
            assert_eq!(registry.validate_announce(LOCALHOST, query).unwrap_err().to_string(), "invalid info_hash size");

            let mut query = announce_query(InfoHash([1; 20]), PeerId([2; 20]), 6881, 10, None);
            query.remove("left");
            assert_eq!(registry.validate_announce(LOCALHOST, query).unwrap_err().to_string(), "missing left");

            let mut query = announce_query(InfoHash([1; 20]), PeerId([2; 20]), 6881, 10, None);
            query.insert(String::from("port"), vec![b"70000".to_vec()]);
            assert!(registry.validate_announce(LOCALHOST, query).is_err());
        }

        #[test]
        fn test_validate_announce_numwant_is_capped() {
            let registry = registry();
            let mut query = announce_query(InfoHash([1; 20]), PeerId([2; 20]), 6881, 10, None);
            query.insert(String::from("numwant"), vec![b"5".to_vec()]);
            assert_eq!(registry.validate_announce(LOCALHOST, query).unwrap().numwant, 5);

            let mut query = announce_query(InfoHash([1; 20]), PeerId([2; 20]), 6881, 10, None);
            query.insert(String::from("numwant"), vec![b"500".to_vec()]);
            assert_eq!(registry.validate_announce(LOCALHOST, query).unwrap().numwant, 72);
        }

        #[test]
        fn test_unknown_torrent_rejected_without_foreign_torrents() {
            let registry = registry();
            let query = announce_query(InfoHash([1; 20]), PeerId([2; 20]), 6881, 10, None);
            let announce = registry.validate_announce(LOCALHOST, query).unwrap();
            assert_eq!(registry.handle_announce(&announce).unwrap_err().to_string(), "unknown info_hash");
            assert!(registry.is_empty());
        }

        #[test]
        fn test_foreign_torrent_accepted() {
            let registry = registry();
            registry.set_accept_foreign_torrents(true);
            let query = announce_query(InfoHash([1; 20]), PeerId([2; 20]), 6881, 10, Some("started"));
            let announce = registry.validate_announce(LOCALHOST, query).unwrap();
            let torrent = registry.handle_announce(&announce).unwrap();
            assert_eq!(torrent.leechers(), 1);
            assert_eq!(torrent.seeders(), 0);
            assert_eq!(registry.len(), 1);
        }

        #[test]
        fn test_completed_and_stopped_events() {
            let registry = registry();
            let info_hash = InfoHash([1; 20]);
            registry.track(info_hash);

            let started = registry.validate_announce(LOCALHOST, announce_query(info_hash, PeerId([2; 20]), 6881, 10, Some("started"))).unwrap();
            registry.handle_announce(&started).unwrap();

            let completed = registry.validate_announce(LOCALHOST, announce_query(info_hash, PeerId([2; 20]), 6881, 0, Some("completed"))).unwrap();
            let torrent = registry.handle_announce(&completed).unwrap();
            assert_eq!(torrent.completed, 1);
            assert_eq!(torrent.seeders(), 1);

            let torrent = registry.handle_announce(&completed).unwrap();
            assert_eq!(torrent.completed, 1);

            let stopped = registry.validate_announce(LOCALHOST, announce_query(info_hash, PeerId([2; 20]), 6881, 0, Some("stopped"))).unwrap();
            let torrent = registry.handle_announce(&stopped).unwrap();
            assert!(torrent.peers.is_empty());
            assert_eq!(torrent.completed, 1);
        }

        #[test]
        fn test_scrape_omits_unknown() {
            let registry = registry();
            registry.track(InfoHash([1; 20]));
            let scraped = registry.scrape(&[InfoHash([1; 20]), InfoHash([9; 20])]);
            assert_eq!(scraped.len(), 1);
            assert_eq!(scraped[0].info_hash, InfoHash([1; 20]));
        }

        #[test]
        fn test_cleanup_drops_stale_peers_and_empty_torrents() {
            let registry = registry();
            let info_hash = InfoHash([1; 20]);
            registry.track(info_hash);
            registry.track(InfoHash([3; 20]));
            let announce = registry.validate_announce(LOCALHOST, announce_query(info_hash, PeerId([2; 20]), 6881, 10, None)).unwrap();
            registry.handle_announce(&announce).unwrap();

            let stats = registry.cleanup(Duration::from_secs(3600));
            assert_eq!(stats.peers, 0);
            assert_eq!(stats.torrents, 1);
            assert_eq!(registry.len(), 1);

            let stats = registry.cleanup(Duration::ZERO);
            assert_eq!(stats.peers, 1);
            assert_eq!(stats.torrents, 1);
            assert!(registry.is_empty());
        }
    }

    mod housekeeping_tests {
        use std::sync::Arc;
        use std::time::Duration;
        use tokio::sync::watch;
        use crate::config::structs::tracker_server_config::TrackerServerConfig;
        use crate::tracker::structs::info_hash::InfoHash;
        use crate::tracker::structs::peer_id::PeerId;
        use crate::tracker::structs::torrent_registry::TorrentRegistry;
        use super::{announce_query, LOCALHOST};

        #[tokio::test]
        async fn test_housekeeping_evicts_and_stops_on_shutdown() {
            let registry = Arc::new(TorrentRegistry::new(Arc::new(TrackerServerConfig {
                cleanup_interval: 1,
                peers_timeout: 0,
                ..TrackerServerConfig::default()
            })));
            let info_hash = InfoHash([1; 20]);
            registry.track(info_hash);
            let query = announce_query(info_hash, PeerId([2; 20]), 6881, 10, None);
            let announce = registry.validate_announce(LOCALHOST, query).unwrap();
            registry.handle_announce(&announce).unwrap();

            let (shutdown, receiver) = watch::channel(false);
            let housekeeping = registry.spawn_housekeeping(receiver);
            assert_eq!(registry.len(), 1);

            tokio::time::sleep(Duration::from_millis(1500)).await;
            assert!(registry.is_empty());
            assert!(!housekeeping.is_finished());

            shutdown.send(true).unwrap();
            tokio::time::timeout(Duration::from_secs(2), housekeeping).await.unwrap().unwrap();
        }
    }

    mod address_tests {
        use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
        use crate::tracker::enums::tracker_start_error::TrackerStartError;
        use crate::tracker::impls::torrent_tracker_manager::{normalize_root_url, resolve_server_address};

        #[test]
        fn test_normalize_strips_one_slash() {
            assert_eq!(normalize_root_url("http://localhost:8111/"), "http://localhost:8111");
            assert_eq!(normalize_root_url("http://localhost:8111"), "http://localhost:8111");
            assert_eq!(normalize_root_url("http://localhost:8111//"), "http://localhost:8111/");
        }

        #[tokio::test]
        async fn test_resolve_literal_addresses() {
            assert_eq!(resolve_server_address("http://127.0.0.1:8111/").await.unwrap(), IpAddr::V4(Ipv4Addr::LOCALHOST));
            assert_eq!(resolve_server_address("http://[::1]:8111").await.unwrap(), IpAddr::V6(Ipv6Addr::LOCALHOST));
        }

        #[tokio::test]
        async fn test_resolve_localhost_name() {
            assert!(resolve_server_address("http://localhost:8111/").await.unwrap().is_loopback());
        }

        #[tokio::test]
        async fn test_resolve_rejects_invalid_urls() {
            assert!(matches!(resolve_server_address("not a url").await, Err(TrackerStartError::InvalidUrl { .. })));
            assert!(matches!(resolve_server_address("mailto:ci@example.com").await, Err(TrackerStartError::MissingHost(_))));
        }
    }

    mod manager_tests {
        use std::net::SocketAddr;
        use std::sync::Arc;
        use url::Url;
        use crate::tracker::enums::tracker_error::TrackerError;
        use crate::tracker::enums::tracker_start_error::TrackerStartError;
        use crate::tracker::enums::tracker_state::TrackerState;
        use crate::tracker::structs::info_hash::InfoHash;
        use crate::tracker::structs::torrent_tracker_manager::TorrentTrackerManager;
        use crate::tracker::structs::tracked_torrent::TrackedTorrent;
        use crate::tracker::traits::port_allocator::MockPortAllocator;
        use crate::tracker::traits::tracker_backend::MockTrackerBackend;

        fn allocator(port: u16) -> Arc<MockPortAllocator> {
            let mut allocator = MockPortAllocator::new();
            allocator.expect_get_free_port()
                .withf(|preferred| *preferred == 6969)
                .returning(move |_| port);
            Arc::new(allocator)
        }

        fn started_backend() -> MockTrackerBackend {
            let mut backend = MockTrackerBackend::new();
            backend.expect_set_accept_foreign_torrents()
                .withf(|accept| *accept)
                .times(1)
                .return_const(());
            backend.expect_start()
                .times(1)
                .returning(|address: SocketAddr| Ok(Url::parse(&format!("http://{}/announce", address)).unwrap()));
            backend
        }

        #[tokio::test]
        async fn test_start_records_endpoint() {
            let manager = TorrentTrackerManager::new(Arc::new(started_backend()), allocator(7000), 6969);
            let endpoint = manager.start("http://127.0.0.1:8111/").await.unwrap();
            assert_eq!(endpoint.bind_address, "127.0.0.1:7000".parse::<SocketAddr>().unwrap());
            assert_eq!(manager.state(), TrackerState::Started);
            assert_eq!(manager.get_announce_uri().as_str(), "http://127.0.0.1:7000/announce");
            assert_eq!(manager.endpoint(), Some(endpoint));
        }

        #[tokio::test]
        async fn test_start_twice_fails() {
            let manager = TorrentTrackerManager::new(Arc::new(started_backend()), allocator(7000), 6969);
            manager.start("http://127.0.0.1:8111").await.unwrap();
            assert!(matches!(manager.start("http://127.0.0.1:8111").await, Err(TrackerStartError::AlreadyStarted)));
            assert_eq!(manager.state(), TrackerState::Started);
        }

        #[tokio::test]
        async fn test_invalid_url_leaves_manager_stopped() {
            let mut backend = MockTrackerBackend::new();
            backend.expect_start().never();
            let manager = TorrentTrackerManager::new(Arc::new(backend), allocator(7000), 6969);
            assert!(manager.start("localhost").await.is_err());
            assert_eq!(manager.state(), TrackerState::Stopped);
            assert!(manager.endpoint().is_none());
        }

        #[tokio::test]
        async fn test_backend_failure_leaves_manager_stopped() {
            let mut backend = MockTrackerBackend::new();
            backend.expect_set_accept_foreign_torrents().return_const(());
            backend.expect_start()
                .returning(|_| Err(TrackerError::Bind(std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use"))));
            let manager = TorrentTrackerManager::new(Arc::new(backend), allocator(7000), 6969);
            assert!(matches!(manager.start("http://127.0.0.1:8111").await, Err(TrackerStartError::Bind(_))));
            assert_eq!(manager.state(), TrackerState::Stopped);
        }

        #[tokio::test]
        async fn test_stop() {
            let mut backend = started_backend();
            backend.expect_stop().times(1).return_const(());
            let manager = TorrentTrackerManager::new(Arc::new(backend), allocator(7000), 6969);
            manager.stop().await;
            manager.start("http://127.0.0.1:8111").await.unwrap();
            manager.stop().await;
            manager.stop().await;
            assert_eq!(manager.state(), TrackerState::Stopped);
            assert!(manager.endpoint().is_none());
        }

        #[test]
        #[should_panic(expected = "announce URI requested while the torrent tracker is stopped")]
        fn test_announce_uri_panics_while_stopped() {
            let manager = TorrentTrackerManager::new(Arc::new(MockTrackerBackend::new()), allocator(7000), 6969);
            manager.get_announce_uri();
        }

        #[test]
        #[should_panic(expected = "tracked torrents requested while the torrent tracker is stopped")]
        fn test_tracked_torrents_panics_while_stopped() {
            let manager = TorrentTrackerManager::new(Arc::new(MockTrackerBackend::new()), allocator(7000), 6969);
            manager.get_tracked_torrents();
        }

        #[test]
        fn test_remove_delegates_to_backend() {
            let mut backend = MockTrackerBackend::new();
            backend.expect_remove()
                .withf(|info_hash| *info_hash == InfoHash([7; 20]))
                .times(1)
                .return_const(());
            let manager = TorrentTrackerManager::new(Arc::new(backend), allocator(7000), 6969);
            manager.remove_tracked_torrent(&TrackedTorrent::new(InfoHash([7; 20])));
        }
    }

    mod port_allocator_tests {
        use std::net::{Ipv4Addr, Ipv6Addr, TcpListener};
        use crate::tracker::structs::local_port_allocator::LocalPortAllocator;
        use crate::tracker::traits::port_allocator::PortAllocator;

        #[test]
        fn test_busy_port_is_skipped() {
            let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, 0)).unwrap();
            let busy = listener.local_addr().unwrap().port();
            let port = LocalPortAllocator.get_free_port(busy);
            assert_ne!(port, busy);
            assert!(TcpListener::bind((Ipv4Addr::UNSPECIFIED, port)).is_ok());
        }

        #[test]
        fn test_port_busy_on_ipv6_only_is_skipped() {
            let Ok(listener) = TcpListener::bind((Ipv6Addr::LOCALHOST, 0)) else {
                return;
            };
            let busy = listener.local_addr().unwrap().port();
            assert!(!LocalPortAllocator::is_port_free(busy));

            let port = LocalPortAllocator.get_free_port(busy);
            assert_ne!(port, busy);
            assert!(TcpListener::bind((Ipv6Addr::LOCALHOST, port)).is_ok());
        }
    }
}
