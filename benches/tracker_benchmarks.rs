// Performance benchmarks for the embedded tracker and settings resolution
// Run with: cargo bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::RngExt;
use std::collections::HashMap;
use std::hint::black_box;
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;
use std::time::Duration;
use torrent_artifacts::agent::structs::agent_configuration::AgentConfiguration;
use torrent_artifacts::agent::structs::current_build_tracker::CurrentBuildTracker;
use torrent_artifacts::agent::structs::json_rpc_channel_factory::JsonRpcChannelFactory;
use torrent_artifacts::common::common::{parse_file_size, parse_query};
use torrent_artifacts::config::structs::tracker_server_config::TrackerServerConfig;
use torrent_artifacts::http::http::http_service_announce_response;
use torrent_artifacts::tracker::structs::info_hash::InfoHash;
use torrent_artifacts::tracker::structs::peer_id::PeerId;
use torrent_artifacts::tracker::structs::torrent_registry::TorrentRegistry;

fn random_info_hash() -> InfoHash {
    let bytes: [u8; 20] = rand::rng().random();
    InfoHash(bytes)
}

fn random_peer_id() -> PeerId {
    let bytes: [u8; 20] = rand::rng().random();
    PeerId(bytes)
}

fn announce_query(info_hash: &InfoHash, peer_id: &PeerId, compact: bool) -> HashMap<String, Vec<Vec<u8>>> {
    let mut query: HashMap<String, Vec<Vec<u8>>> = HashMap::new();
    query.insert(String::from("info_hash"), vec![info_hash.0.to_vec()]);
    query.insert(String::from("peer_id"), vec![peer_id.0.to_vec()]);
    query.insert(String::from("port"), vec![b"6881".to_vec()]);
    query.insert(String::from("uploaded"), vec![b"0".to_vec()]);
    query.insert(String::from("downloaded"), vec![b"0".to_vec()]);
    query.insert(String::from("left"), vec![b"1000".to_vec()]);
    if compact {
        query.insert(String::from("compact"), vec![b"1".to_vec()]);
    }
    query
}

fn create_registry() -> TorrentRegistry {
    let registry = TorrentRegistry::new(Arc::new(TrackerServerConfig::default()));
    registry.set_accept_foreign_torrents(true);
    registry
}

fn populate(registry: &TorrentRegistry, info_hash: &InfoHash, peers: u32) {
    for i in 0..peers {
        let ip = IpAddr::V4(Ipv4Addr::from(0x0a00_0000 + i));
        let announce = registry.validate_announce(ip, announce_query(info_hash, &random_peer_id(), false)).unwrap();
        registry.handle_announce(&announce).unwrap();
    }
}

fn bench_announce(c: &mut Criterion) {
    let registry = create_registry();
    let remote = IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1));

    c.bench_function("announce_new_torrent", |b| {
        b.iter(|| {
            let query = announce_query(&random_info_hash(), &random_peer_id(), true);
            let announce = registry.validate_announce(remote, query).unwrap();
            black_box(registry.handle_announce(&announce).unwrap());
        });
    });
}

fn bench_announce_response(c: &mut Criterion) {
    let registry = create_registry();
    let remote = IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1));
    let mut group = c.benchmark_group("announce_response");

    for peers in [10u32, 100, 1000].iter() {
        let info_hash = random_info_hash();
        populate(&registry, &info_hash, *peers);
        for compact in [true, false] {
            let announce = registry.validate_announce(remote, announce_query(&info_hash, &random_peer_id(), compact)).unwrap();
            let torrent = registry.handle_announce(&announce).unwrap();
            let name = if compact { "compact" } else { "list" };
            group.bench_with_input(BenchmarkId::new(name, peers), peers, |b, _| {
                b.iter(|| black_box(http_service_announce_response(&registry, &announce, &torrent)));
            });
        }
    }

    group.finish();
}

fn bench_cleanup(c: &mut Criterion) {
    c.bench_function("cleanup_1000_torrents", |b| {
        b.iter_batched(
            || {
                let registry = create_registry();
                for _ in 0..1000 {
                    populate(&registry, &random_info_hash(), 1);
                }
                registry
            },
            |registry| black_box(registry.cleanup(Duration::ZERO)),
            criterion::BatchSize::LargeInput,
        );
    });
}

fn bench_parsing(c: &mut Criterion) {
    let query = format!(
        "info_hash={}&peer_id={}&port=6881&uploaded=0&downloaded=0&left=1000&compact=1&event=started",
        "%AB".repeat(20),
        "%CD".repeat(20)
    );

    c.bench_function("parse_query", |b| {
        b.iter(|| black_box(parse_query(Some(query.clone())).unwrap()));
    });

    c.bench_function("parse_file_size", |b| {
        b.iter(|| black_box(parse_file_size(black_box("1.5 GB")).unwrap()));
    });
}

fn bench_resolve_settings(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let builds = Arc::new(CurrentBuildTracker::new());
    builds.build_started(HashMap::from([
        (String::from("max-connections"), String::from("16")),
        (String::from("file-size-threshold-bytes"), String::from("not a size")),
    ]));
    let settings = AgentConfiguration::new(builds, Arc::new(JsonRpcChannelFactory));

    c.bench_function("resolve_snapshot_unbound", |b| {
        b.to_async(&rt).iter(|| async { black_box(settings.snapshot().await) });
    });
}

criterion_group!(
    benches,
    bench_announce,
    bench_announce_response,
    bench_cleanup,
    bench_parsing,
    bench_resolve_settings,
);

criterion_main!(benches);
