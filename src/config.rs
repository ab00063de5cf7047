use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

fn default_host() -> IpAddr { IpAddr::V4(Ipv4Addr::UNSPECIFIED) }
fn default_port() -> u16 { 3001 }
fn default_filename_prefix() -> String { "ons".to_string() }
fn default_log_level() -> String {
    if cfg!(feature = "verbose_log") { "debug".to_string() } else { "info".to_string() }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl ConfigError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ConfigError::Io { source, .. } if source.kind() == std::io::ErrorKind::NotFound)
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, ToSchema)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    #[schema(value_type = String)]
    pub host: IpAddr,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port() }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    /// Leading part of suggested download filenames
    #[serde(default = "default_filename_prefix")]
    pub filename_prefix: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { filename_prefix: default_filename_prefix() }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// `tracing` filter directive; `RUST_LOG` takes precedence
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level() }
    }
}

impl Config {
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json(path, &content)
    }

    fn from_json(path: &str, content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::from_json("inline", r#"{ "server": { "port": 8080 } }"#).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, default_host());
        assert_eq!(config.export.filename_prefix, "ons");
    }

    #[test]
    fn test_full_config() {
        let config = Config::from_json(
            "inline",
            r#"{
                "server": { "host": "127.0.0.1", "port": 9000 },
                "export": { "filename_prefix": "sin" },
                "logging": { "level": "warn" }
            }"#,
        )
        .unwrap();
        assert_eq!(config.server.socket_addr().to_string(), "127.0.0.1:9000");
        assert_eq!(config.export.filename_prefix, "sin");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_missing_and_malformed_files() {
        let err = Config::load("does/not/exist.json").unwrap_err();
        assert!(err.is_not_found());

        let err = Config::from_json("inline", "{ server: }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(!err.is_not_found());
    }
}
