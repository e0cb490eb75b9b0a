//! # Advisor Configuration
//!
//! Selects and configures the text-generation backend.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     TIPEASE_BACKEND=http                                               │
//! │     TIPEASE_ENDPOINT=https://advisor.example.com/fair-split            │
//! │     TIPEASE_TIMEOUT_SECS=20                                            │
//! │     TIPEASE_API_KEY=...                                                │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <PATH>, else                                              │
//! │     ~/.config/tipease/advisor.toml (Linux)                             │
//! │     ~/Library/Application Support/com.tipease.tipease/advisor.toml     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     offline backend, 30 second timeout                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # advisor.toml
//! [backend]
//! kind = "http"            # http | offline
//! endpoint = "https://advisor.example.com/fair-split"
//! timeout_secs = 30
//! api_key = "secret"       # optional, sent as a bearer token
//!
//! [messages]
//! fallback = "Sorry, I couldn't come up with a suggestion right now. Please try again."
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info, warn};

use tipease_core::advisory::FALLBACK_MESSAGE;

use crate::error::{AdvisorError, AdvisorResult};

/// Config file name inside the platform config directory.
pub const CONFIG_FILE_NAME: &str = "advisor.toml";

// =============================================================================
// Backend Kind
// =============================================================================

/// Which text generator answers advisory requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BackendKind {
    /// Local deterministic generator, no network.
    #[default]
    Offline,

    /// Remote text-generation endpoint over HTTP.
    Http,
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendKind::Offline => write!(f, "offline"),
            BackendKind::Http => write!(f, "http"),
        }
    }
}

impl std::str::FromStr for BackendKind {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "offline" | "local" => Ok(BackendKind::Offline),
            "http" | "remote" => Ok(BackendKind::Http),
            other => Err(AdvisorError::InvalidConfig(format!(
                "Unknown backend kind: '{}'. Valid options: http, offline",
                other
            ))),
        }
    }
}

// =============================================================================
// Backend Settings
// =============================================================================

/// Backend selection and transport settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendSettings {
    #[serde(default)]
    pub kind: BackendKind,

    /// Fair-split endpoint. Required for the HTTP backend.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Request timeout (seconds).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Optional bearer token.
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_timeout() -> u64 {
    30
}

impl Default for BackendSettings {
    fn default() -> Self {
        BackendSettings {
            kind: BackendKind::default(),
            endpoint: None,
            timeout_secs: default_timeout(),
            api_key: None,
        }
    }
}

// =============================================================================
// Message Settings
// =============================================================================

/// User-facing text the service can substitute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSettings {
    /// Shown when the backend fails.
    #[serde(default = "default_fallback")]
    pub fallback: String,
}

fn default_fallback() -> String {
    FALLBACK_MESSAGE.to_string()
}

impl Default for MessageSettings {
    fn default() -> Self {
        MessageSettings {
            fallback: default_fallback(),
        }
    }
}

// =============================================================================
// Main Advisor Configuration
// =============================================================================

/// Complete advisor configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdvisorConfig {
    #[serde(default)]
    pub backend: BackendSettings,

    #[serde(default)]
    pub messages: MessageSettings,
}

impl AdvisorConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (advisor.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> AdvisorResult<Self> {
        let mut config = match config_path.or_else(Self::default_config_path) {
            Some(path) => Self::read_file(&path)?,
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load advisor config: {}. Using defaults.", e);
            Self::default()
        })
    }

    fn read_file(path: &Path) -> AdvisorResult<Self> {
        if !path.exists() {
            debug!(?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        info!(?path, "Loading advisor config from file");
        let contents = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> AdvisorResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| AdvisorError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| AdvisorError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| AdvisorError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Advisor config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> AdvisorResult<()> {
        if self.backend.timeout_secs == 0 {
            return Err(AdvisorError::InvalidConfig(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        if self.backend.kind == BackendKind::Http {
            let endpoint = self.backend.endpoint.as_deref().ok_or_else(|| {
                AdvisorError::InvalidConfig("http backend requires an endpoint".into())
            })?;
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(AdvisorError::InvalidUrl(format!(
                    "Endpoint must start with http:// or https://, got: {}",
                    endpoint
                )));
            }
        }

        Ok(())
    }

    /// Applies `TIPEASE_*` environment variable overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup (environment, test map).
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(kind) = lookup("TIPEASE_BACKEND") {
            match kind.parse() {
                Ok(parsed) => {
                    debug!(backend = %kind, "Overriding backend from environment");
                    self.backend.kind = parsed;
                }
                Err(_) => warn!(backend = %kind, "Unknown backend kind in environment"),
            }
        }

        if let Some(endpoint) = lookup("TIPEASE_ENDPOINT") {
            debug!(endpoint = %endpoint, "Overriding endpoint from environment");
            self.backend.endpoint = Some(endpoint);
        }

        if let Some(timeout) = lookup("TIPEASE_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) => self.backend.timeout_secs = secs,
                Err(_) => warn!(timeout = %timeout, "Invalid timeout in environment"),
            }
        }

        if let Some(key) = lookup("TIPEASE_API_KEY") {
            self.backend.api_key = Some(key);
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "tipease", "tipease")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    pub fn backend_kind(&self) -> BackendKind {
        self.backend.kind
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.backend.endpoint.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.backend.timeout_secs)
    }

    pub fn fallback_message(&self) -> &str {
        &self.messages.fallback
    }
}
