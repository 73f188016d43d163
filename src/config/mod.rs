use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Where the console and the server read and write records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// The SQLite database file (`database`)
    #[default]
    Sqlite,
    /// A running `stagelist serve` (`server_url`)
    Remote,
    /// A JSON file with no server at all (`local_store`)
    Local,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    #[serde(default = "default_port")]
    pub port: u16,
    #[serde(default = "default_server_url")]
    pub server_url: String,
    #[serde(default)]
    pub backend: Backend,
    #[serde(default = "default_local_store")]
    pub local_store: String,
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

/// Keys a complete configuration file carries, in file order.
pub const CONFIG_KEYS: [&str; 7] = [
    "database",
    "bind_address",
    "port",
    "server_url",
    "backend",
    "local_store",
    "poll_interval_ms",
];

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    5000
}
fn default_server_url() -> String {
    "http://localhost:5000".to_string()
}
fn default_local_store() -> String {
    Config::config_dir()
        .join("stagelist.json")
        .to_string_lossy()
        .to_string()
}
fn default_poll_interval_ms() -> u64 {
    1000
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            bind_address: default_bind_address(),
            port: default_port(),
            server_url: default_server_url(),
            backend: Backend::default(),
            local_store: default_local_store(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("stagelist")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".stagelist")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("stagelist.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("stagelist.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    /// Keys absent from the file at `path` (their defaults are in effect).
    pub fn missing_keys(path: &Path) -> AppResult<Vec<&'static str>> {
        if !path.exists() {
            return Ok(CONFIG_KEYS.to_vec());
        }
        let content = fs::read_to_string(path)?;
        let value: serde_yaml::Value = serde_yaml::from_str(&content)?;
        let map = value.as_mapping();

        Ok(CONFIG_KEYS
            .into_iter()
            .filter(|key| !map.is_some_and(|m| m.contains_key(*key)))
            .collect())
    }

    pub fn poll_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.poll_interval_ms.max(1))
    }
}
