use std::net::SocketAddr;
use std::sync::Arc;
use async_trait::async_trait;
use log::{error, info, warn};
use parking_lot::Mutex;
use tokio::sync::watch;
use url::Url;
use crate::config::structs::tracker_server_config::TrackerServerConfig;
use crate::http::http::http_service;
use crate::tracker::enums::tracker_error::TrackerError;
use crate::tracker::structs::embedded_tracker::EmbeddedTracker;
use crate::tracker::structs::info_hash::InfoHash;
use crate::tracker::structs::running_tracker::RunningTracker;
use crate::tracker::structs::torrent_registry::TorrentRegistry;
use crate::tracker::structs::tracked_torrent::TrackedTorrent;
use crate::tracker::traits::tracker_backend::TrackerBackend;

impl EmbeddedTracker {
    pub fn new(config: Arc<TrackerServerConfig>) -> EmbeddedTracker
    {
        EmbeddedTracker {
            registry: Arc::new(TorrentRegistry::new(config)),
            running: Mutex::new(None),
        }
    }

    pub fn is_running(&self) -> bool
    {
        self.running.lock().is_some()
    }

    /// Starts tracking a torrent published by this server.
    pub fn track(&self, info_hash: InfoHash) -> bool
    {
        self.registry.track(info_hash)
    }
}

#[async_trait]
impl TrackerBackend for EmbeddedTracker {
    fn set_accept_foreign_torrents(&self, accept: bool)
    {
        self.registry.set_accept_foreign_torrents(accept);
    }

    async fn start(&self, bind_address: SocketAddr) -> Result<Url, TrackerError>
    {
        if let Some(running) = self.running.lock().as_ref() {
            warn!("[TRACKER] Already listening on {}", running.announce_url);
            return Ok(running.announce_url.clone());
        }

        let (server, addrs, future) = http_service(bind_address, self.registry.clone(), self.registry.config.threads)?;
        let Some(bound) = addrs.first() else {
            return Err(TrackerError::NoAddress);
        };
        let announce_url = Url::parse(&format!("http://{}/announce", bound))?;

        tokio::spawn(async move {
            if let Err(error) = future.await {
                error!("[HTTP] Tracker listener failed: {}", error);
            }
        });
        let (shutdown, shutdown_receiver) = watch::channel(false);
        let housekeeping = self.registry.spawn_housekeeping(shutdown_receiver);

        info!("[TRACKER] Listening for announces on {}", announce_url);
        *self.running.lock() = Some(RunningTracker {
            announce_url: announce_url.clone(),
            server,
            housekeeping,
            shutdown,
        });
        Ok(announce_url)
    }

    async fn stop(&self)
    {
        let Some(running) = self.running.lock().take() else {
            return;
        };

        let _ = running.shutdown.send(true);
        running.server.stop(true).await;
        if let Err(error) = running.housekeeping.await {
            warn!("[TRACKER] Housekeeping task ended abnormally: {}", error);
        }
        self.registry.clear();
        info!("[TRACKER] Stopped listening on {}", running.announce_url);
    }

    fn announce_url(&self) -> Result<Url, TrackerError>
    {
        self.running.lock().as_ref()
            .map(|running| running.announce_url.clone())
            .ok_or(TrackerError::NotRunning)
    }

    fn tracked_torrents(&self) -> Vec<TrackedTorrent>
    {
        self.registry.tracked_torrents()
    }

    fn remove(&self, info_hash: &InfoHash)
    {
        self.registry.remove(info_hash);
    }
}
