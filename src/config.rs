use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Port used when neither the config file nor `PORT` provides one.
pub const DEFAULT_PORT: u16 = 8080;

/// Environment variable that overrides `gateway.port`.
pub const PORT_ENV: &str = "PORT";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse config file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid PORT value {value:?}")]
    InvalidPort {
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Which route set and middleware a gateway is built with.
#[derive(Debug, Default, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ServiceProfile {
    /// `/orders` only, no request logging
    Minimal,
    /// `/orders` + `/health`, every request logged
    #[default]
    Full,
}

impl ServiceProfile {
    pub fn has_health_check(self) -> bool {
        matches!(self, ServiceProfile::Full)
    }

    pub fn logs_requests(self) -> bool {
        matches!(self, ServiceProfile::Full)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    /// Disable to log to stdout only
    pub log_to_file: bool,
    pub use_json: bool,
    pub rotation: String,
    pub profile: ServiceProfile,
    pub gateway: GatewayConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_dir: "logs".to_string(),
            log_file: "order-service.log".to_string(),
            log_to_file: true,
            use_json: false,
            rotation: "daily".to_string(),
            profile: ServiceProfile::Full,
            gateway: GatewayConfig::default(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl GatewayConfig {
    /// `host:port` as handed to the socket bind
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl AppConfig {
    /// Load `config/<env>.yaml` and apply environment overrides.
    ///
    /// A missing file is not an error: the built-in defaults are used.
    pub fn load(env: &str) -> Result<Self, ConfigError> {
        let config_path = PathBuf::from(format!("config/{}.yaml", env));
        let config = if config_path.exists() {
            Self::from_file(&config_path)?
        } else {
            Self::default()
        };
        config.apply_env_with(|key| std::env::var(key).ok())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Apply environment overrides read through `lookup`.
    ///
    /// An empty `PORT` counts as unset.
    pub fn apply_env_with<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(PORT_ENV).filter(|v| !v.is_empty()) {
            self.gateway.port = value
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value, source })?;
        }
        Ok(self)
    }

    /// Configuration of the legacy variant: fixed port, no env, stdout logs.
    pub fn legacy() -> Self {
        Self {
            log_to_file: false,
            profile: ServiceProfile::Minimal,
            ..Self::default()
        }
    }
}
