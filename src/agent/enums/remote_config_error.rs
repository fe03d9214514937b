use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RemoteConfigError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid target URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Remote error {code}: {message}")]
    Rpc { code: i64, message: String },

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Call timed out after {0:?}")]
    Timeout(Duration),
}
