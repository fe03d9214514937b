use std::sync::atomic::AtomicU64;
use url::Url;

/// Remote configuration channel speaking JSON-RPC 2.0 over HTTP POST.
#[derive(Debug)]
pub struct JsonRpcChannel {
    pub(crate) client: reqwest::Client,
    pub(crate) endpoint: Url,
    pub(crate) request_id: AtomicU64,
}
