//! Shared types, errors and on-disk configuration for the UAA command-line client

pub mod auth;
pub mod config;
pub mod context;
pub mod error;
pub mod types;

pub use auth::{Credentials, GrantRequest};
pub use config::{Config, ConfigStore, Settings, UAA_HOME_ENV};
pub use context::UaaContext;
pub use error::{ErrorKind, Result, UaaError, ValidationError};
pub use types::*;
