use actix_web::dev::ServerHandle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use url::Url;

pub struct RunningTracker {
    pub(crate) announce_url: Url,
    pub(crate) server: ServerHandle,
    pub(crate) housekeeping: JoinHandle<()>,
    pub(crate) shutdown: watch::Sender<bool>,
}
