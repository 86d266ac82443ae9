//! Resolver configuration
//!
//! Loads configuration from YAML and applies environment overrides.
//! Every field has a default, so a missing file yields a working setup
//! pointed at the public English Wikipedia API.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::error::ConfigError;
use crate::resolve::QuoteMode;

/// Default configuration path
pub const DEFAULT_CONFIG_PATH: &str = "config/sidebyside.yaml";

/// Default lookup service endpoint
pub const DEFAULT_API_BASE: &str = "https://en.wikipedia.org/w/api.php";

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SideBySideConfig {
    pub server: ServerConfig,
    pub lookup: LookupConfig,
    pub resolver: ResolverConfig,
}

/// HTTP adapter settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Lookup service client settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// MediaWiki `api.php` endpoint
    pub api_base: String,
    /// Ranked names requested from name search
    pub search_limit: u32,
    /// Thumbnail width requested from image lookup
    pub thumbnail_size: u32,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            search_limit: 3,
            thumbnail_size: 500,
            request_timeout_secs: 30,
            user_agent: concat!("sidebyside/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl LookupConfig {
    /// Parsed `api_base`
    pub fn api_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.api_base).map_err(|e| ConfigError::InvalidValue {
            key: "lookup.api_base".to_string(),
            reason: e.to_string(),
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

/// Resolution engine settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    pub quote_mode: QuoteMode,
    /// Upper bound on a single lookup, including both of its requests
    pub lookup_timeout_ms: u64,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            quote_mode: QuoteMode::default(),
            lookup_timeout_ms: 10_000,
        }
    }
}

impl ResolverConfig {
    pub fn lookup_timeout(&self) -> Duration {
        Duration::from_millis(self.lookup_timeout_ms)
    }
}

impl SideBySideConfig {
    /// Load configuration from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&content).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Load from `SIDEBYSIDE_CONFIG` (or the default path), then apply env overrides.
    ///
    /// A missing file is not an error; defaults are used instead.
    pub fn load() -> Result<Self, ConfigError> {
        let path = std::env::var("SIDEBYSIDE_CONFIG")
            .unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let mut config = if Path::new(&path).exists() {
            tracing::info!(path = %path, "Loading configuration");
            Self::from_file(&path)?
        } else {
            tracing::info!(path = %path, "No configuration file, using defaults");
            Self::default()
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a key lookup (normally the process environment)
    pub fn apply_overrides<F>(&mut self, get: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = get("SIDEBYSIDE_BIND_ADDR") {
            self.server.bind_addr = addr;
        }
        if let Some(base) = get("SIDEBYSIDE_API_BASE") {
            self.lookup.api_base = base;
        }
        if let Some(ms) = get("SIDEBYSIDE_LOOKUP_TIMEOUT_MS") {
            self.resolver.lookup_timeout_ms =
                ms.parse().map_err(|_| ConfigError::InvalidValue {
                    key: "SIDEBYSIDE_LOOKUP_TIMEOUT_MS".to_string(),
                    reason: format!("'{}' is not a number of milliseconds", ms),
                })?;
        }
        if let Some(mode) = get("SIDEBYSIDE_QUOTE_MODE") {
            self.resolver.quote_mode = mode.parse()?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.lookup.api_url()?;
        if self.lookup.search_limit == 0 {
            return Err(ConfigError::InvalidValue {
                key: "lookup.search_limit".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        if self.resolver.lookup_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                key: "resolver.lookup_timeout_ms".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
