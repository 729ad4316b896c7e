use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub mod check;

const APP_DIR: &str = ".presence-analyzer";
const CONFIG_FILE: &str = "presence-analyzer.conf";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_csv")]
    pub data_csv: String,
    #[serde(default = "default_data_xml")]
    pub data_xml: String,
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// How long loaded data files are reused before being read again.
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_secs: u64,
}

fn default_data_csv() -> String {
    format!("~/{APP_DIR}/data.csv")
}
fn default_data_xml() -> String {
    format!("~/{APP_DIR}/users.xml")
}
fn default_host() -> String {
    "127.0.0.1".to_string()
}
fn default_port() -> u16 {
    5000
}
fn default_cache_ttl() -> u64 {
    600
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_csv: default_data_csv(),
            data_xml: default_data_xml(),
            host: default_host(),
            port: default_port(),
            cache_ttl_secs: default_cache_ttl(),
        }
    }
}

impl Config {
    /// `~/.presence-analyzer`, or `./.presence-analyzer` when no home is known.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| AppError::ConfigLoad(format!("{}: {e}", path.display())))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| AppError::ConfigLoad(e.to_string()))
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        serde_yaml::to_string(self).map_err(|e| AppError::ConfigSave(e.to_string()))
    }

    /// Create the config directory and write a default config file.
    /// An existing file is left untouched. Returns the config file path and
    /// whether it was created.
    pub fn init() -> AppResult<(PathBuf, bool)> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let path = Self::config_file();
        if path.exists() {
            return Ok((path, false));
        }

        let yaml = Self::default().to_yaml()?;
        fs::write(&path, yaml).map_err(|e| AppError::ConfigSave(e.to_string()))?;
        Ok((path, true))
    }

    pub fn data_csv_path(&self) -> PathBuf {
        expand_tilde(&self.data_csv)
    }

    pub fn data_xml_path(&self) -> PathBuf {
        expand_tilde(&self.data_xml)
    }
}
