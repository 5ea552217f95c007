//! Error types for fetching, presenting and configuring the gallery

use std::path::PathBuf;
use thiserror::Error;

/// Failure while retrieving records from the APOD API.
///
/// `Clone` so it can travel inside iced messages; transport errors are
/// captured as their display string for that reason.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP error! status: {status}")]
    HttpStatus { status: u16 },

    #[error("API error: {0}")]
    Api(String),

    #[error("unexpected payload: {0}")]
    Decode(String),

    #[error("invalid request URL: {0}")]
    Url(String),
}

// The request URL carries the API key, so it is dropped before the message
// is kept or logged.
impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.without_url().to_string())
    }
}

/// A UI collaborator the pipeline depends on is not there.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PresentationError {
    #[error("{0} not found")]
    MissingElement(&'static str),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("no API key configured (set APOD_API_KEY or add api_key to {0})")]
    MissingApiKey(PathBuf),

    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Anything that can stop the load pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GalleryError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Presentation(#[from] PresentationError),
}
