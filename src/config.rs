//! User configuration, read from `~/.flagdex/config.yaml`

use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{
    DEFAULT_COUNTRIES_URL, DEFAULT_FLAG_CONCURRENCY, DEFAULT_LOG_FILE, PLACEHOLDER_FLAG_URL,
};
use crate::view::ViewOptions;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Endpoint returning the JSON array of countries
    pub endpoint: String,
    pub placeholder_flag_url: String,
    pub search_enabled: bool,
    /// No timeout unless set
    pub request_timeout_secs: Option<u64>,
    pub flag_concurrency: usize,
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: String::from(DEFAULT_COUNTRIES_URL),
            placeholder_flag_url: String::from(PLACEHOLDER_FLAG_URL),
            search_enabled: true,
            request_timeout_secs: None,
            flag_concurrency: DEFAULT_FLAG_CONCURRENCY,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl Config {
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".flagdex")
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Load from the default location, falling back to defaults if absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        let config: Config = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.endpoint.trim().is_empty() {
            bail!("Config validation failed: endpoint must not be empty");
        }
        if self.flag_concurrency == 0 {
            bail!("Config validation failed: flag_concurrency must be at least 1");
        }
        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn view_options(&self) -> ViewOptions {
        ViewOptions {
            search_enabled: self.search_enabled,
            placeholder_flag_url: self.placeholder_flag_url.clone(),
        }
    }
}
