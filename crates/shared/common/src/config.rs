//! Store configuration loaded from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

// =============================================================================
// Defaults
// =============================================================================

/// Default Redis URL (for development)
pub const DEFAULT_REDIS_URL: &str = "redis://127.0.0.1:6379";

/// Key prefix for every stored document
pub const DEFAULT_KEY_PREFIX: &str = "doc:";

/// Environment variable selecting the backend
pub const ENV_BACKEND: &str = "STORE_BACKEND";

/// Environment variable holding the Redis URL
pub const ENV_REDIS_URL: &str = "REDIS_URL";

/// Environment variable holding the document key prefix
pub const ENV_KEY_PREFIX: &str = "STORE_KEY_PREFIX";

/// Which backing store repositories are built on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Process-local mapping, lost at exit
    #[default]
    Memory,
    /// Remote document store reached over Redis
    Redis,
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" | "in-memory" | "in_memory" => Ok(Backend::Memory),
            "redis" | "remote" => Ok(Backend::Redis),
            other => Err(format!(
                "unknown backend '{}', expected 'memory' or 'redis'",
                other
            )),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Memory => write!(f, "memory"),
            Backend::Redis => write!(f, "redis"),
        }
    }
}

/// Repository backend configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    pub backend: Backend,
    pub redis_url: String,
    pub key_prefix: String,
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("backend", &self.backend)
            .field("redis_url", &"[REDACTED]")
            .field("key_prefix", &self.key_prefix)
            .finish()
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            redis_url: DEFAULT_REDIS_URL.to_string(),
            key_prefix: DEFAULT_KEY_PREFIX.to_string(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// An unset backend means the default; an unrecognised one is an error.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = match lookup(ENV_BACKEND) {
            Some(raw) => raw
                .parse::<Backend>()
                .map_err(|e: String| AppError::config(format!("{}: {}", ENV_BACKEND, e)))?,
            None => Backend::default(),
        };

        Ok(Self {
            backend,
            redis_url: lookup(ENV_REDIS_URL).unwrap_or_else(|| DEFAULT_REDIS_URL.to_string()),
            key_prefix: lookup(ENV_KEY_PREFIX).unwrap_or_else(|| DEFAULT_KEY_PREFIX.to_string()),
        })
    }

    /// Override the backend
    pub fn with_backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }
}
