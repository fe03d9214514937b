use std::borrow::Cow;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use actix_web::{App, HttpRequest, HttpResponse, HttpServer, web};
use actix_web::dev::{Server, ServerHandle};
use actix_web::http::header::ContentType;
use actix_web::web::{Data, ServiceConfig};
use bip_bencode::{ben_bytes, ben_int, ben_list, ben_map, BMutAccess};
use log::{debug, info};
use crate::common::common::parse_query;
use crate::tracker::structs::announce_query_request::AnnounceQueryRequest;
use crate::tracker::structs::torrent_registry::TorrentRegistry;
use crate::tracker::structs::tracked_torrent::TrackedTorrent;

pub fn http_service_routes(data: Arc<TorrentRegistry>) -> Box<dyn Fn(&mut ServiceConfig)>
{
    Box::new(move |cfg: &mut ServiceConfig| {
        cfg.app_data(Data::new(data.clone()));
        cfg.service(web::resource("/announce").route(web::get().to(http_service_announce)));
        cfg.service(web::resource("/scrape").route(web::get().to(http_service_scrape)));
        cfg.default_service(web::route().to(http_service_not_found));
    })
}

/// Binds the tracker listener and returns it unstarted with the addresses it bound.
pub fn http_service(
    addr: SocketAddr,
    data: Arc<TorrentRegistry>,
    threads: u64,
) -> Result<(ServerHandle, Vec<SocketAddr>, Server), std::io::Error>
{
    info!("[HTTP] Starting server listener on {}", addr);
    let server = HttpServer::new(move || {
        App::new()
            .configure(http_service_routes(data.clone()))
    })
        .workers(threads.max(1) as usize)
        .bind((addr.ip(), addr.port()))?
        .disable_signals();
    let addrs = server.addrs();
    let server = server.run();

    Ok((server.handle(), addrs, server))
}

fn http_service_failure(reason: String) -> HttpResponse
{
    HttpResponse::Ok().content_type(ContentType::plaintext()).body(ben_map! {
        "failure reason" => ben_bytes!(reason)
    }.encode())
}

fn http_service_remote_ip(request: &HttpRequest) -> Option<IpAddr>
{
    request.peer_addr().map(|addr| addr.ip())
}

pub async fn http_service_announce(request: HttpRequest, data: Data<Arc<TorrentRegistry>>) -> HttpResponse
{
    let Some(ip) = http_service_remote_ip(&request) else {
        return http_service_failure(String::from("unknown origin ip"));
    };
    debug!("[HTTP] Request from {}: Announce", ip);

    let query_map = match parse_query(Some(request.query_string().to_string())) {
        Ok(result) => result,
        Err(e) => {
            return http_service_failure(e.to_string());
        }
    };

    let announce = match data.validate_announce(ip, query_map) {
        Ok(result) => result,
        Err(e) => {
            return http_service_failure(e.to_string());
        }
    };

    match data.handle_announce(&announce) {
        Ok(torrent) => HttpResponse::Ok().content_type(ContentType::plaintext()).body(
            http_service_announce_response(&data, &announce, &torrent)
        ),
        Err(e) => http_service_failure(e.to_string()),
    }
}

/// Bencoded announce response for `torrent`, excluding the announcing peer.
pub fn http_service_announce_response(data: &TorrentRegistry, announce: &AnnounceQueryRequest, torrent: &TrackedTorrent) -> Vec<u8>
{
    let others = torrent.peers.values()
        .filter(|peer| peer.peer_id != announce.peer_id)
        .take(announce.numwant as usize);

    let interval = ben_int!(data.config.announce_interval as i64);
    let min_interval = ben_int!(data.config.announce_interval_minimum as i64);
    let complete = ben_int!(torrent.seeders() as i64);
    let incomplete = ben_int!(torrent.leechers() as i64);
    let downloaded = ben_int!(torrent.completed as i64);

    if announce.compact {
        let mut peers: Vec<u8> = Vec::new();
        let mut peers6: Vec<u8> = Vec::new();
        for peer in others {
            match peer.peer_addr.ip() {
                IpAddr::V4(ip) => {
                    peers.extend_from_slice(&ip.octets());
                    peers.extend_from_slice(&peer.peer_addr.port().to_be_bytes());
                }
                IpAddr::V6(ip) => {
                    peers6.extend_from_slice(&ip.octets());
                    peers6.extend_from_slice(&peer.peer_addr.port().to_be_bytes());
                }
            }
        }
        return ben_map! {
            "interval" => interval,
            "min interval" => min_interval,
            "complete" => complete,
            "incomplete" => incomplete,
            "downloaded" => downloaded,
            "peers" => ben_bytes!(peers),
            "peers6" => ben_bytes!(peers6)
        }.encode();
    }

    let mut peers_list = ben_list!();
    if let Some(peers_list_mut) = peers_list.list_mut() {
        for peer in others {
            if announce.no_peer_id {
                peers_list_mut.push(ben_map! {
                    "ip" => ben_bytes!(peer.peer_addr.ip().to_string()),
                    "port" => ben_int!(peer.peer_addr.port() as i64)
                });
            } else {
                peers_list_mut.push(ben_map! {
                    "peer id" => ben_bytes!(peer.peer_id.0.to_vec()),
                    "ip" => ben_bytes!(peer.peer_addr.ip().to_string()),
                    "port" => ben_int!(peer.peer_addr.port() as i64)
                });
            }
        }
    }
    ben_map! {
        "interval" => interval,
        "min interval" => min_interval,
        "complete" => complete,
        "incomplete" => incomplete,
        "downloaded" => downloaded,
        "peers" => peers_list
    }.encode()
}

pub async fn http_service_scrape(request: HttpRequest, data: Data<Arc<TorrentRegistry>>) -> HttpResponse
{
    if let Some(ip) = http_service_remote_ip(&request) {
        debug!("[HTTP] Request from {}: Scrape", ip);
    }

    let query_map = match parse_query(Some(request.query_string().to_string())) {
        Ok(result) => result,
        Err(e) => {
            return http_service_failure(e.to_string());
        }
    };

    let info_hashes = match data.validate_scrape(query_map) {
        Ok(result) => result,
        Err(e) => {
            return http_service_failure(e.to_string());
        }
    };

    let mut scrape_list = ben_map!();
    if let Some(scrape_list_mut) = scrape_list.dict_mut() {
        for torrent in data.scrape(&info_hashes) {
            scrape_list_mut.insert(Cow::from(torrent.info_hash.0.to_vec()), ben_map! {
                "complete" => ben_int!(torrent.seeders() as i64),
                "downloaded" => ben_int!(torrent.completed as i64),
                "incomplete" => ben_int!(torrent.leechers() as i64)
            });
        }
    }
    HttpResponse::Ok().content_type(ContentType::plaintext()).body(ben_map! {
        "files" => scrape_list
    }.encode())
}

pub async fn http_service_not_found(request: HttpRequest) -> HttpResponse
{
    debug!("[HTTP] Unknown path requested: {}", request.path());
    HttpResponse::NotFound().content_type(ContentType::plaintext()).body(ben_map! {
        "failure reason" => ben_bytes!("unknown request")
    }.encode())
}
