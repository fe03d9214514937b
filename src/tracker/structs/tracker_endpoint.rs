use std::net::SocketAddr;
use url::Url;

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct TrackerEndpoint {
    pub bind_address: SocketAddr,
    pub announce_url: Url,
}
