//! On-disk configuration: the set of named targets and which one is active

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::context::UaaContext;
use crate::error::{Result, UaaError, ValidationError};

/// Environment variable overriding the config directory.
pub const UAA_HOME_ENV: &str = "UAA_HOME";

const CONFIG_FILE_NAME: &str = "config.json";

/// All known targets plus the pointer to the active one
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Targets keyed by name
    pub contexts: BTreeMap<String, UaaContext>,

    /// Name of the active target, if any
    pub active_context: Option<String>,

    /// Client behaviour settings
    pub settings: Settings,

    /// Fields written by other versions of the client, kept verbatim
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Client-wide settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// HTTP timeout in seconds; unset keeps the transport default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_timeout_secs: Option<u64>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// A config holding a single active target named by its URL.
    pub fn with_target(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        let mut config = Self::default();
        config.add_context(base_url.clone(), UaaContext::new(base_url));
        config
    }

    /// The active context, or an empty one when no target is set.
    pub fn active_context(&self) -> UaaContext {
        self.active_context
            .as_ref()
            .and_then(|name| self.contexts.get(name))
            .cloned()
            .unwrap_or_default()
    }

    pub fn active_context_name(&self) -> Option<&str> {
        self.active_context
            .as_deref()
            .filter(|name| self.contexts.contains_key(*name))
    }

    /// Insert or replace a context and make it the active one.
    pub fn add_context(&mut self, name: impl Into<String>, context: UaaContext) {
        let name = name.into();
        self.contexts.insert(name.clone(), context);
        self.active_context = Some(name);
    }

    /// Overwrite the active context, leaving every other context alone.
    pub fn update_active(&mut self, context: UaaContext) -> Result<()> {
        let name = self
            .active_context_name()
            .ok_or(ValidationError::NoTarget)?
            .to_string();
        self.contexts.insert(name, context);
        Ok(())
    }

    /// Remove a context; removing the active one leaves no target set.
    pub fn remove_context(&mut self, name: &str) -> Option<UaaContext> {
        let removed = self.contexts.remove(name);
        if self.active_context.as_deref() == Some(name) {
            self.active_context = None;
        }
        removed
    }

    pub fn context_names(&self) -> Vec<&str> {
        self.contexts.keys().map(String::as_str).collect()
    }
}

/// Reads and writes [`Config`] as JSON inside a directory
#[derive(Debug, Clone)]
pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// `$UAA_HOME` when set, otherwise `~/.uaa`.
    pub fn from_env() -> Result<Self> {
        if let Some(dir) = std::env::var_os(UAA_HOME_ENV).filter(|d| !d.is_empty()) {
            return Ok(Self::new(dir));
        }

        let base = directories::BaseDirs::new().ok_or_else(|| UaaError::ConfigUnreadable {
            path: PathBuf::from(CONFIG_FILE_NAME),
            source: io::Error::new(io::ErrorKind::NotFound, "home directory not found"),
        })?;

        Ok(Self::new(base.home_dir().join(".uaa")))
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE_NAME)
    }

    /// Load the config; a missing file is an empty config, not an error.
    pub fn read(&self) -> Result<Config> {
        let path = self.path();

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No config at {}, starting empty", path.display());
                return Ok(Config::default());
            }
            Err(source) => return Err(UaaError::ConfigUnreadable { path, source }),
        };

        serde_json::from_str(&content).map_err(|e| UaaError::ConfigUnreadable {
            path,
            source: io::Error::new(io::ErrorKind::InvalidData, e),
        })
    }

    /// Persist the config, replacing the previous file in one rename.
    pub fn write(&self, config: &Config) -> Result<()> {
        let path = self.path();
        tracing::debug!("Writing config to {}", path.display());

        let content = serde_json::to_string_pretty(config).map_err(|e| {
            UaaError::ConfigUnwritable {
                path: path.clone(),
                source: io::Error::new(io::ErrorKind::InvalidData, e),
            }
        })?;

        write_atomic(&path, content.as_bytes())
            .map_err(|source| UaaError::ConfigUnwritable { path, source })
    }
}

fn write_atomic(path: &Path, content: &[u8]) -> io::Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent)?;

    let tmp = parent.join(format!("{CONFIG_FILE_NAME}.{}.tmp", std::process::id()));
    {
        let mut file = fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&tmp)?;
        // holds bearer tokens
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp, fs::Permissions::from_mode(0o600))?;
        }
        file.write_all(content)?;
        file.sync_all()?;
    }
    fs::rename(tmp, path)
}
