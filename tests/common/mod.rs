#![allow(dead_code)]
use rand::RngExt;
use std::net::SocketAddr;
use std::sync::Arc;
use actix_web::{web, App, HttpResponse, HttpServer};
use actix_web::dev::ServerHandle;
use serde_json::{json, Value};
use tempfile::TempDir;
use torrent_artifacts::config::structs::configuration::Configuration;
use torrent_artifacts::config::structs::tracker_server_config::TrackerServerConfig;
use torrent_artifacts::tracker::structs::info_hash::InfoHash;
use torrent_artifacts::tracker::structs::peer_id::PeerId;
use torrent_artifacts::tracker::structs::torrent_registry::TorrentRegistry;

pub type TestRegistry = Arc<TorrentRegistry>;

pub fn create_test_config() -> Configuration {
    Configuration::init()
}

pub fn create_test_tracker_config() -> Arc<TrackerServerConfig> {
    Arc::new(TrackerServerConfig {
        threads: 1,
        ..TrackerServerConfig::default()
    })
}

pub fn create_test_registry() -> TestRegistry {
    Arc::new(TorrentRegistry::new(create_test_tracker_config()))
}

pub fn create_temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp directory")
}

pub fn random_info_hash() -> InfoHash {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    InfoHash(bytes)
}

pub fn random_peer_id() -> PeerId {
    let mut rng = rand::rng();
    let bytes: [u8; 20] = rng.random();
    PeerId(bytes)
}

pub fn url_encode(bytes: &[u8]) -> String {
    percent_encoding::percent_encode(bytes, percent_encoding::NON_ALPHANUMERIC).to_string()
}

pub fn announce_uri(path: &str, info_hash: &InfoHash, peer_id: &PeerId, port: u16, left: u64, extra: &str) -> String {
    format!(
        "{}?info_hash={}&peer_id={}&port={}&uploaded=0&downloaded=0&left={}{}",
        path,
        url_encode(&info_hash.0),
        url_encode(&peer_id.0),
        port,
        left,
        extra
    )
}

pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}

/// Answers JSON-RPC calls from a fixed table of `method => result`.
pub async fn start_rpc_server(results: Value) -> (ServerHandle, SocketAddr) {
    let results = web::Data::new(results);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(results.clone())
            .route("/RPC2", web::post().to(rpc_handler))
    })
        .workers(1)
        .disable_signals()
        .bind(("127.0.0.1", 0))
        .expect("Failed to bind RPC server");
    let address = server.addrs()[0];
    let server = server.run();
    let handle = server.handle();
    tokio::spawn(server);
    (handle, address)
}

async fn rpc_handler(results: web::Data<Value>, body: web::Json<Value>) -> HttpResponse {
    let id = body.get("id").cloned().unwrap_or(Value::Null);
    let method = body.get("method").and_then(Value::as_str).unwrap_or_default();
    match results.get(method) {
        Some(result) => HttpResponse::Ok().json(json!({"jsonrpc": "2.0", "result": result, "id": id})),
        None => HttpResponse::Ok().json(json!({
            "jsonrpc": "2.0",
            "error": {"code": -32601, "message": format!("No such handler: {}", method)},
            "id": id
        })),
    }
}
