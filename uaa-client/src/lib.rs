//! UAA client - builds requests against a target, classifies responses and runs token grants

pub mod endpoints;
pub mod pipeline;
pub mod response;
pub mod token;
pub mod trace;

pub use endpoints::{info, token_key};
pub use response::RawResponse;
pub use token::TokenExchange;

use std::time::Duration;
use uaa_shared::{Result, UaaContext, UaaError};

/// Per-invocation knobs that are not part of the stored context
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientOptions {
    /// Print raw requests and responses to stdout
    pub trace: bool,
    /// Overall request timeout; `None` keeps the transport default
    pub timeout: Option<Duration>,
}

impl ClientOptions {
    pub fn new(trace: bool, timeout: Option<Duration>) -> Self {
        Self { trace, timeout }
    }
}

/// HTTP client bound to one target
pub struct UaaClient {
    http: reqwest::Client,
    context: UaaContext,
    options: ClientOptions,
}

impl UaaClient {
    pub fn new(context: UaaContext, options: ClientOptions) -> Result<Self> {
        let mut builder = reqwest::Client::builder();

        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        if context.skip_ssl_validation {
            tracing::debug!("TLS certificate validation disabled for {}", context.base_url);
            builder = builder.danger_accept_invalid_certs(true);
        }

        let http = builder.build().map_err(UaaError::HttpClient)?;

        Ok(Self {
            http,
            context,
            options,
        })
    }

    pub fn context(&self) -> &UaaContext {
        &self.context
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }
}
