use std::{
    fs, io,
    path::{Path, PathBuf},
};

use log::{debug, info};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::KenkuError;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:3333/v1";
pub const DEFAULT_CONFIG_PATH: &str = "config.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    #[serde(rename = "baseURL")]
    pub base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    pub fn set_base_url(&mut self, value: &str) -> Result<(), KenkuError> {
        let value = value.trim();
        parse_base_url(value)?;
        self.base_url = value.to_string();
        Ok(())
    }
}

pub fn parse_base_url(value: &str) -> Result<Url, KenkuError> {
    Url::parse(value).map_err(|source| KenkuError::InvalidBaseUrl {
        url: value.to_string(),
        source,
    })
}

/// Loads and persists the single settings record.
pub trait ConfigStore {
    fn load(&self) -> Result<Config, KenkuError>;
    fn save(&self, config: &Config) -> Result<(), KenkuError>;
}

pub struct JsonConfigStore {
    path: PathBuf,
}

impl JsonConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for JsonConfigStore {
    fn default() -> Self {
        Self::new(DEFAULT_CONFIG_PATH)
    }
}

impl ConfigStore for JsonConfigStore {
    fn load(&self) -> Result<Config, KenkuError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No config at {}, using defaults", self.path.display());
                return Ok(Config::default());
            }
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_str(&content)?)
    }

    fn save(&self, config: &Config) -> Result<(), KenkuError> {
        let json = serde_json::to_string_pretty(config)?;
        fs::write(&self.path, json)?;
        info!("Config written to {}", self.path.display());
        Ok(())
    }
}
