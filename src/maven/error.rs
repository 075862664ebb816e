use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single network request
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("could not fetch url \"{url}\": {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("could not fetch url \"{url}\": HTTP {status}")]
    Status { url: String, status: u16 },
}

impl TransportError {
    /// The failure without the URL it happened on
    pub fn reason(&self) -> String {
        match self {
            TransportError::Client(source) | TransportError::Request { source, .. } => source.to_string(),
            TransportError::Status { status, .. } => format!("HTTP {status}"),
        }
    }
}

/// Why the last lookup of an artifact failed
#[derive(Debug, Error)]
pub enum FetchFailure {
    #[error("no maven mirrors configured")]
    NoMirrors,

    #[error("could not open file \"{}\": {source}", path.display())]
    Local {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// An artifact could not be resolved from any source
#[derive(Debug, Error)]
#[error("{filename} ({coordinate}): {cause}")]
pub struct FetchError {
    pub coordinate: String,
    pub filename: String,
    #[source]
    pub cause: FetchFailure,
}
