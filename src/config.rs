use catalog_core::{RemoteCredentials, DEFAULT_TABLE};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Source of a configuration value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSource {
    Default,
    File,
    Environment,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Default => write!(f, "default"),
            ConfigSource::File => write!(f, "file"),
            ConfigSource::Environment => write!(f, "environment"),
        }
    }
}

/// A configuration value with its source
#[derive(Debug, Clone, Serialize)]
pub struct ConfigValue<T> {
    pub value: T,
    pub source: ConfigSource,
}

impl<T> ConfigValue<T> {
    pub fn new(value: T, source: ConfigSource) -> Self {
        Self { value, source }
    }
}

/// Application configuration with source tracking
#[derive(Debug, Clone)]
pub struct Config {
    /// Project URL of the hosted data service
    pub remote_url: ConfigValue<Option<String>>,
    /// Public (anon) access key
    pub anon_key: ConfigValue<Option<String>>,
    /// Name of the remote product table
    pub table: ConfigValue<String>,
    /// Config file path used (if any)
    pub config_file: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct RemoteSection {
    url: Option<String>,
    anon_key: Option<String>,
}

/// Internal struct for deserializing config file
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ConfigFile {
    remote: Option<RemoteSection>,
    table: Option<String>,
}

impl Config {
    /// Load configuration with priority: env vars > config file > defaults
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut remote_url = ConfigValue::new(None, ConfigSource::Default);
        let mut anon_key = ConfigValue::new(None, ConfigSource::Default);
        let mut table = ConfigValue::new(DEFAULT_TABLE.to_string(), ConfigSource::Default);
        let mut config_file = None;

        let path = config_path.unwrap_or_else(Self::default_config_path);
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| ConfigError::ReadError(path.clone(), e))?;
            let file_config: ConfigFile = serde_yaml::from_str(&contents)
                .map_err(|e| ConfigError::ParseError(path.clone(), e))?;

            config_file = Some(path.clone());

            if let Some(remote) = file_config.remote {
                if let Some(url) = remote.url {
                    remote_url = ConfigValue::new(Some(url), ConfigSource::File);
                }
                if let Some(key) = remote.anon_key {
                    anon_key = ConfigValue::new(Some(key), ConfigSource::File);
                }
            }
            if let Some(name) = file_config.table {
                table = ConfigValue::new(name, ConfigSource::File);
            }
        }

        if let Ok(url) = std::env::var("SUPABASE_URL") {
            remote_url = ConfigValue::new(Some(url), ConfigSource::Environment);
        }
        if let Ok(key) = std::env::var("SUPABASE_ANON_KEY") {
            anon_key = ConfigValue::new(Some(key), ConfigSource::Environment);
        }
        if let Ok(name) = std::env::var("CATALOG_TABLE") {
            table = ConfigValue::new(name, ConfigSource::Environment);
        }

        Ok(Self {
            remote_url,
            anon_key,
            table,
            config_file,
        })
    }

    pub fn credentials(&self) -> RemoteCredentials {
        RemoteCredentials {
            url: self.remote_url.value.clone(),
            anon_key: self.anon_key.value.clone(),
        }
    }

    /// Default config directory (platform-specific):
    /// - Linux: ~/.config/catalog/
    /// - macOS: ~/Library/Application Support/catalog/
    /// - Windows: %APPDATA%/catalog/
    pub fn default_config_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("catalog")
    }

    pub fn default_config_path() -> PathBuf {
        Self::default_config_dir().join("config.yaml")
    }
}

#[derive(Debug)]
pub enum ConfigError {
    ReadError(PathBuf, std::io::Error),
    ParseError(PathBuf, serde_yaml::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ReadError(path, e) => {
                write!(f, "Failed to read config file '{}': {}", path.display(), e)
            }
            ConfigError::ParseError(path, e) => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), e)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
