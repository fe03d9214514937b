use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use log::{debug, error, info};
use parking_lot::RwLock;
use url::{Host, Url};
use crate::config::structs::tracker_server_config::TrackerServerConfig;
use crate::tracker::enums::tracker_start_error::TrackerStartError;
use crate::tracker::enums::tracker_state::TrackerState;
use crate::tracker::structs::torrent_tracker_manager::TorrentTrackerManager;
use crate::tracker::structs::tracked_torrent::TrackedTorrent;
use crate::tracker::structs::tracker_endpoint::TrackerEndpoint;
use crate::tracker::traits::port_allocator::PortAllocator;
use crate::tracker::traits::tracker_backend::TrackerBackend;

/// `server_root_url` without one trailing `/`.
pub fn normalize_root_url(server_root_url: &str) -> &str
{
    server_root_url.strip_suffix('/').unwrap_or(server_root_url)
}

/// Address the tracker binds to for `server_root_url`.
///
/// Literal addresses are used as they are, host names are resolved and the
/// first address returned wins.
pub async fn resolve_server_address(server_root_url: &str) -> Result<IpAddr, TrackerStartError>
{
    let normalized = normalize_root_url(server_root_url);
    let url = Url::parse(normalized).map_err(|source| TrackerStartError::InvalidUrl {
        url: normalized.to_string(),
        source,
    })?;

    match url.host() {
        None => Err(TrackerStartError::MissingHost(normalized.to_string())),
        Some(Host::Ipv4(ip)) => Ok(IpAddr::V4(ip)),
        Some(Host::Ipv6(ip)) => Ok(IpAddr::V6(ip)),
        Some(Host::Domain(domain)) => {
            let mut addresses = tokio::net::lookup_host((domain, 0)).await.map_err(|error| TrackerStartError::UnresolvableHost {
                host: domain.to_string(),
                reason: error.to_string(),
            })?;
            addresses.next().map(|address| address.ip()).ok_or_else(|| TrackerStartError::UnresolvableHost {
                host: domain.to_string(),
                reason: String::from("no addresses returned"),
            })
        }
    }
}

impl TorrentTrackerManager {
    pub fn new(backend: Arc<dyn TrackerBackend>, port_allocator: Arc<dyn PortAllocator>, preferred_port: u16) -> TorrentTrackerManager
    {
        TorrentTrackerManager {
            backend,
            port_allocator,
            preferred_port,
            state: RwLock::new(TrackerState::Stopped),
            endpoint: RwLock::new(None),
        }
    }

    pub fn from_config(config: &TrackerServerConfig, backend: Arc<dyn TrackerBackend>, port_allocator: Arc<dyn PortAllocator>) -> TorrentTrackerManager
    {
        TorrentTrackerManager::new(backend, port_allocator, config.preferred_port)
    }

    pub fn state(&self) -> TrackerState
    {
        *self.state.read()
    }

    pub fn endpoint(&self) -> Option<TrackerEndpoint>
    {
        self.endpoint.read().clone()
    }

    /// Starts the tracker for the server reachable at `server_root_url`.
    ///
    /// Failures are logged and returned; the manager is left `Stopped`.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn start(&self, server_root_url: &str) -> Result<TrackerEndpoint, TrackerStartError>
    {
        {
            let mut state = self.state.write();
            if *state != TrackerState::Stopped {
                error!("[TRACKER] Failed to start torrent tracker, it is {}", *state);
                return Err(TrackerStartError::AlreadyStarted);
            }
            *state = TrackerState::Starting;
        }

        match self.start_backend(server_root_url).await {
            Ok(endpoint) => {
                info!("[TRACKER] Torrent tracker started on url: {}", endpoint.announce_url);
                *self.endpoint.write() = Some(endpoint.clone());
                *self.state.write() = TrackerState::Started;
                Ok(endpoint)
            }
            Err(error) => {
                error!("[TRACKER] Failed to start torrent tracker, server URL is invalid: {}", error);
                *self.state.write() = TrackerState::Stopped;
                Err(error)
            }
        }
    }

    async fn start_backend(&self, server_root_url: &str) -> Result<TrackerEndpoint, TrackerStartError>
    {
        let port = self.port_allocator.get_free_port(self.preferred_port);
        let address = resolve_server_address(server_root_url).await?;
        let bind_address = SocketAddr::new(address, port);
        debug!("[TRACKER] Binding torrent tracker to {}", bind_address);

        self.backend.set_accept_foreign_torrents(true);
        let announce_url = self.backend.start(bind_address).await?;
        Ok(TrackerEndpoint {
            bind_address,
            announce_url,
        })
    }

    pub async fn stop(&self)
    {
        if self.state() != TrackerState::Started {
            debug!("[TRACKER] Torrent tracker is not running");
            return;
        }

        self.backend.stop().await;
        *self.endpoint.write() = None;
        *self.state.write() = TrackerState::Stopped;
        info!("[TRACKER] Torrent tracker stopped");
    }

    /// # Panics
    ///
    /// When the tracker is not started.
    pub fn get_announce_uri(&self) -> Url
    {
        let endpoint = self.endpoint.read().clone();
        match endpoint {
            Some(endpoint) => endpoint.announce_url,
            None => panic!("announce URI requested while the torrent tracker is {}", self.state()),
        }
    }

    /// # Panics
    ///
    /// When the tracker is not started.
    pub fn get_tracked_torrents(&self) -> Vec<TrackedTorrent>
    {
        let state = self.state();
        if state != TrackerState::Started {
            panic!("tracked torrents requested while the torrent tracker is {}", state);
        }
        self.backend.tracked_torrents()
    }

    pub fn remove_tracked_torrent(&self, torrent: &TrackedTorrent)
    {
        self.backend.remove(&torrent.info_hash);
    }
}
