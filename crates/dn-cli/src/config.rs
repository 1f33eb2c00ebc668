//! Configuration loading and management.

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use dn_api::{Client, DEFAULT_BASE_URL, DEFAULT_TIMEOUT, HttpTransport};
use dn_core::Credential;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Diggernaut API key.
    pub api_key: Option<String>,
    /// API root, without a trailing slash.
    pub base_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT.as_secs(),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (DN_*)
        figment = figment.merge(Env::prefixed("DN_"));

        figment.extract()
    }

    /// The configured API key as a credential.
    pub fn credential(&self) -> Result<Credential> {
        let key = self
            .api_key
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| {
                anyhow::anyhow!("missing API key (set DN_API_KEY or api_key in config.toml)")
            })?;
        Credential::new(key).context("invalid API key in configuration")
    }

    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Builds an HTTP client from the configured URL and timeout.
    pub fn client(&self) -> Result<Client> {
        let transport =
            HttpTransport::with_timeout(self.timeout()).context("failed to create HTTP client")?;
        Ok(Client::with_transport(transport).with_base_url(self.base_url.clone()))
    }
}

/// Returns the platform-specific config directory for dn.
///
/// On Linux: `~/.config/diggernaut`
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("diggernaut"))
}
