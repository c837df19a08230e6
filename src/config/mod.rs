//! Configuration loading and management

use crate::core::error::ConfigError;
use crate::core::model::{Address, Supplier};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Environment variable overriding `bind_address`
pub const BIND_ENV_VAR: &str = "SUPPLIERS_BIND";

/// Environment variable naming a YAML config file
pub const CONFIG_ENV_VAR: &str = "SUPPLIERS_CONFIG";

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Address the HTTP server binds to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Suppliers loaded into the store at startup, in listing order
    #[serde(default = "ServerConfig::default_seed")]
    pub seed: Vec<Supplier>,
}

fn default_bind_address() -> String {
    "127.0.0.1:3000".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            seed: Self::default_seed(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Load from the file named by `SUPPLIERS_CONFIG`, or defaults if unset
    pub fn load() -> Result<Self, ConfigError> {
        let config = match std::env::var(CONFIG_ENV_VAR) {
            Ok(path) => Self::from_yaml_file(&path)?,
            Err(_) => Self::default(),
        };
        Ok(config.with_env_overrides())
    }

    /// Apply `SUPPLIERS_BIND` if set
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(address) = std::env::var(BIND_ENV_VAR) {
            self.bind_address = address;
        }
        self
    }

    /// Parse `bind_address` into a socket address
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.bind_address
            .parse()
            .map_err(|_| ConfigError::InvalidBindAddress {
                address: self.bind_address.clone(),
            })
    }

    /// Five suppliers, `ID` 1 through 5
    pub fn default_seed() -> Vec<Supplier> {
        (1..=5)
            .map(|id| {
                Supplier::new(
                    id,
                    format!("Company {}", id),
                    Address::new(id, format!("Address {}", id)),
                )
            })
            .collect()
    }
}
