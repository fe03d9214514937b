use thiserror::Error;
use crate::tracker::enums::tracker_error::TrackerError;

#[derive(Error, Debug)]
pub enum TrackerStartError {
    #[error("Server URL '{url}' is invalid: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Server URL '{0}' has no host")]
    MissingHost(String),

    #[error("Unable to resolve host '{host}': {reason}")]
    UnresolvableHost { host: String, reason: String },

    #[error(transparent)]
    Bind(#[from] TrackerError),

    #[error("Torrent tracker is already started")]
    AlreadyStarted,
}
