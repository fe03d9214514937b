use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Unable to bind tracker: {0}")]
    Bind(#[from] std::io::Error),

    #[error("Tracker bound no address")]
    NoAddress,

    #[error("Invalid announce URL: {0}")]
    AnnounceUrl(#[from] url::ParseError),

    #[error("Tracker is not running")]
    NotRunning,
}
