//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use quiz_core::model::ValidationError;

/// Errors emitted while talking to the processing endpoint.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProcessingError {
    #[error("processing request timed out")]
    Timeout,
    #[error("processing request failed with status {status}")]
    HttpStatus {
        status: reqwest::StatusCode,
        detail: Option<String>,
    },
    #[error("processing response could not be parsed: {0}")]
    Malformed(#[source] serde_json::Error),
    #[error(transparent)]
    Http(reqwest::Error),
}

impl From<reqwest::Error> for ProcessingError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(err)
        }
    }
}

/// Errors emitted by `UploadService::submit`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Processing(#[from] ProcessingError),
}

/// Errors emitted while reading a file picked from disk.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadFileError {
    #[error("{} has no file name", path.display())]
    NoFileName { path: PathBuf },
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors for invalid processing configuration.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid base url {raw:?}: {source}")]
    InvalidBaseUrl {
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("base url must use http or https: {raw}")]
    UnsupportedScheme { raw: String },
    #[error("timeout must be a whole number of seconds, got {raw:?}")]
    InvalidTimeout { raw: String },
    #[error("timeout must be > 0 seconds")]
    ZeroTimeout,
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("could not build http client: {0}")]
    Client(#[source] reqwest::Error),
}
