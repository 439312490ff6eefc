//! Command handlers and the mapping from errors to user-facing output

use std::fmt;
use std::time::Duration;

use uaa_client::{ClientOptions, UaaClient};
use uaa_shared::{Config, ConfigStore, UaaContext, UaaError, ValidationError};

pub mod context;
pub mod info;
pub mod target;
pub mod token;

/// Printed when a token grant fails for any reason other than validation.
pub const TOKEN_FAILURE_MESSAGE: &str = "An error occurred while fetching token.";
pub const TOKEN_SUCCESS_MESSAGE: &str = "Access token successfully fetched.";

/// A failed command: what the user reads on stdout plus the underlying cause for stderr
#[derive(Debug)]
pub struct CommandError {
    pub message: String,
    pub detail: Option<UaaError>,
}

pub type CommandResult = std::result::Result<(), CommandError>;

impl CommandError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            detail: None,
        }
    }

    pub fn with_detail(message: impl Into<String>, detail: UaaError) -> Self {
        Self {
            message: message.into(),
            detail: Some(detail),
        }
    }
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        Self::new(err.to_string())
    }
}

impl From<UaaError> for CommandError {
    fn from(err: UaaError) -> Self {
        match err {
            UaaError::Validation(v) => v.into(),
            other => Self::new(other.to_string()),
        }
    }
}

/// State loaded once per invocation and handed to every command
pub struct Session {
    pub store: ConfigStore,
    pub config: Config,
    pub options: ClientOptions,
}

impl Session {
    /// Read the config; a timeout given on the command line beats the stored setting.
    pub fn load(
        store: ConfigStore,
        trace: bool,
        timeout_secs: Option<u64>,
    ) -> std::result::Result<Self, UaaError> {
        let config = store.read()?;
        let timeout = timeout_secs
            .or(config.settings.http_timeout_secs)
            .map(Duration::from_secs);

        Ok(Self {
            store,
            config,
            options: ClientOptions::new(trace, timeout),
        })
    }

    /// The active context, or the "no target" validation failure.
    pub fn require_target(&self) -> std::result::Result<UaaContext, ValidationError> {
        let context = self.config.active_context();
        if context.has_target() {
            Ok(context)
        } else {
            Err(ValidationError::NoTarget)
        }
    }

    pub fn client(&self, context: UaaContext) -> std::result::Result<UaaClient, UaaError> {
        UaaClient::new(context, self.options.clone())
    }
}

/// Pretty JSON to stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> CommandResult {
    let json = serde_json::to_string_pretty(value).map_err(UaaError::Json)?;
    println!("{json}");
    Ok(())
}
