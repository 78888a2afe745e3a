//! Configuration loading and parsing for `release-digest.toml` files.
use log::*;
use serde::Deserialize;
use std::path::Path;

use crate::{
    digest::DEFAULT_WINDOW_DAYS,
    error::{ReleaseDigestError, Result},
};

/// Default configuration filename.
pub const DEFAULT_CONFIG_FILE: &str = "release-digest.toml";
/// Default page size for paginated release queries
pub const DEFAULT_PAGE_SIZE: u8 = 100;

/// Settings for listing releases from GitHub.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)] // Use default for missing fields
pub struct GithubConfig {
    /// Includes draft releases (default: false)
    pub include_drafts: bool,
    /// Includes prereleases (default: true)
    pub include_prereleases: bool,
    /// Number of releases requested per page (default: 100)
    pub page_size: u8,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            include_drafts: false,
            include_prereleases: true,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Root configuration structure for `release-digest.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of days covered by a digest.
    pub window_days: u32,
    /// GitHub release listing settings.
    pub github: GithubConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_days: DEFAULT_WINDOW_DAYS,
            github: GithubConfig::default(),
        }
    }
}

impl Config {
    /// Parse and validate configuration from TOML content.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from `path`, falling back to defaults when the
    /// file does not exist.
    pub async fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("no configuration found: using default");
            return Ok(Config::default());
        }

        debug!("loading configuration from: {}", path.display());
        let content = tokio::fs::read_to_string(path).await?;
        Self::from_toml(&content)
    }

    fn validate(&self) -> Result<()> {
        if self.window_days == 0 {
            return Err(ReleaseDigestError::invalid_config(
                "window_days must be greater than zero",
            ));
        }

        if self.github.page_size == 0 {
            return Err(ReleaseDigestError::invalid_config(
                "github.page_size must be greater than zero",
            ));
        }

        Ok(())
    }
}
