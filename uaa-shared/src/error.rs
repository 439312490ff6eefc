//! Error types for the UAA client

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, UaaError>;

#[derive(Error, Debug)]
pub enum UaaError {
    /// The request never produced a response (connection refused, timeout, TLS failure).
    #[error("Network error calling {url}: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx response carrying a decodable `{error, error_description}` body.
    #[error("UAA returned {status}: {error}{}", .description.as_deref().map(|d| format!(" ({d})")).unwrap_or_default())]
    Api {
        status: u16,
        error: String,
        description: Option<String>,
    },

    /// Non-2xx response whose body is not a UAA error object.
    #[error("UAA returned {status} with an unparseable body: {body}")]
    UnparseableApi { status: u16, body: String },

    /// 2xx response whose body does not match the expected shape.
    #[error("Malformed response from {path}: {source}. Body: {body}")]
    MalformedResponse {
        path: String,
        body: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not read config file {}: {source}", .path.display())]
    ConfigUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write config file {}: {source}", .path.display())]
    ConfigUnwritable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Could not build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures detected locally before any network activity.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing argument `{0}` must be specified.")]
    MissingArgument(&'static str),

    #[error("You must set a target in order to use this command.")]
    NoTarget,

    #[error("The active context has no refresh token. Fetch a token with a password grant first.")]
    NoRefreshToken,
}

/// Coarse classification of a [`UaaError`], handy for exhaustive matching at the command layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Api,
    UnparseableApi,
    MalformedResponse,
    ConfigUnreadable,
    ConfigUnwritable,
    Validation,
    Other,
}

impl UaaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            UaaError::Network { .. } => ErrorKind::Network,
            UaaError::Api { .. } => ErrorKind::Api,
            UaaError::UnparseableApi { .. } => ErrorKind::UnparseableApi,
            UaaError::MalformedResponse { .. } => ErrorKind::MalformedResponse,
            UaaError::ConfigUnreadable { .. } => ErrorKind::ConfigUnreadable,
            UaaError::ConfigUnwritable { .. } => ErrorKind::ConfigUnwritable,
            UaaError::Validation(_) => ErrorKind::Validation,
            UaaError::InvalidUrl(_) | UaaError::HttpClient(_) | UaaError::Json(_) => {
                ErrorKind::Other
            }
        }
    }

    /// The validation failure, if this error was raised before any network call.
    pub fn as_validation(&self) -> Option<&ValidationError> {
        match self {
            UaaError::Validation(v) => Some(v),
            _ => None,
        }
    }
}
