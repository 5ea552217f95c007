//! API key and endpoint resolution
//!
//! Lookup order for the key: `APOD_API_KEY` in the environment, then
//! `api_key` in `~/.config/apodview/config.json`, then the key baked in at
//! build time via `APOD_API_KEY`.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://api.nasa.gov";
pub const API_KEY_VAR: &str = "APOD_API_KEY";

const BUILD_API_KEY: Option<&str> = option_env!("APOD_API_KEY");

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
}

/// On-disk shape; every field optional so a partial file still works
#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    api_key: Option<String>,
    base_url: Option<String>,
}

impl Config {
    /// Resolve configuration from the environment, the config file and build-time defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = config_path();
        let file = read_file_config(&path)?;
        let env_key = std::env::var(API_KEY_VAR).ok();
        Self::resolve(env_key, file, BUILD_API_KEY, &path)
    }

    fn resolve(
        env_key: Option<String>,
        file: FileConfig,
        build_key: Option<&str>,
        path: &Path,
    ) -> Result<Self, ConfigError> {
        let api_key = [env_key, file.api_key, build_key.map(str::to_string)]
            .into_iter()
            .flatten()
            .map(|key| key.trim().to_string())
            .find(|key| !key.is_empty())
            .ok_or_else(|| ConfigError::MissingApiKey(path.to_path_buf()))?;

        let base_url = file
            .base_url
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Ok(Self { api_key, base_url })
    }
}

pub fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("./.config"))
        .join("apodview")
        .join("config.json")
}

fn read_file_config(path: &Path) -> Result<FileConfig, ConfigError> {
    if !path.exists() {
        return Ok(FileConfig::default());
    }

    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
