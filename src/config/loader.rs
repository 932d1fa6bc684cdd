//! Configuration structures and loading logic.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::api::{ApiSettings, API_BASE, DEFAULT_TIMEOUT, MAX_PER_PAGE};
use crate::error::{Error, Result};

/// Default output file name.
pub const DEFAULT_OUTPUT_PATH: &str = "qiita_items.csv";

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub account: AccountConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Account credentials configuration.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct AccountConfig {
    /// Qiita personal access token (needs the `read_qiita` scope).
    #[serde(default)]
    pub access_token: String,
}

impl std::fmt::Debug for AccountConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountConfig")
            .field("access_token", &"<redacted>")
            .finish()
    }
}

/// Remote API configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// API base URL.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Items requested per page (1-100).
    #[serde(default = "default_per_page")]
    pub per_page: u32,

    /// Per-request timeout.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            per_page: default_per_page(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

/// Output file configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Destination CSV file.
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
        }
    }
}

fn default_endpoint() -> String {
    API_BASE.to_string()
}

fn default_per_page() -> u32 {
    MAX_PER_PAGE
}

fn default_timeout_seconds() -> u64 {
    DEFAULT_TIMEOUT.as_secs()
}

fn default_output_path() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_PATH)
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Config(format!("Failed to read {}: {}", path.display(), e))
            }
        })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Settings for building the API client.
    pub fn api_settings(&self) -> ApiSettings {
        ApiSettings {
            access_token: self.account.access_token.clone(),
            endpoint: self.api.endpoint.clone(),
            per_page: self.api.per_page,
            timeout: Duration::from_secs(self.api.timeout_seconds),
        }
    }

    /// Destination file for the export.
    pub fn output_path(&self) -> &Path {
        &self.output.path
    }
}
