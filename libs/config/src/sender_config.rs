//! Sender Configuration Module
//!
//! Loads the sender's TOML configuration with environment-variable
//! overrides (TRAPWIRE_ prefix). Expected schema:
//!
//! ```toml
//! [server]
//! ip = "127.0.0.1"
//! port = 10051
//! version = "4.0"
//!
//! [agent]
//! port = 10050
//! loglevel = "info"
//! logfile = "trapwire.log"
//! ```

use crate::error::{ConfigError, Result};
use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use types::ServerAddress;

/// Main sender configuration structure
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SenderConfig {
    /// Monitoring server endpoint
    pub server: ServerSection,

    /// Local agent settings
    pub agent: AgentSection,
}

/// Monitoring server endpoint settings
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerSection {
    pub ip: String,
    pub port: u16,
    /// Server version hint, informational only
    pub version: Option<String>,
}

/// Local agent settings
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AgentSection {
    /// Listen port for passive checks; unused by the sender itself
    pub port: Option<u16>,

    #[serde(default = "default_loglevel")]
    pub loglevel: String,

    pub logfile: Option<PathBuf>,
}

fn default_loglevel() -> String {
    "info".to_string()
}

impl SenderConfig {
    /// Load configuration from a TOML file with environment overrides.
    ///
    /// Environment variables with the `TRAPWIRE_` prefix override file
    /// values (`TRAPWIRE_SERVER_PORT=10052`). A missing or malformed file
    /// is returned as an error, never a panic: aborting is the entry
    /// point's call.
    pub fn load(path: &Path) -> Result<Self> {
        let shown = path.display().to_string();

        let config = Config::builder()
            .add_source(File::from(path).required(true))
            .add_source(
                Environment::with_prefix("TRAPWIRE")
                    .separator("_")
                    .try_parsing(true),
            )
            .build()
            .map_err(|source| ConfigError::Read {
                path: shown.clone(),
                source,
            })?;

        let config: SenderConfig =
            config
                .try_deserialize()
                .map_err(|source| ConfigError::Parse {
                    path: shown.clone(),
                    source,
                })?;

        debug!(path = %shown, server = %config.server.ip, "Loaded sender configuration");

        Ok(config)
    }

    /// The validated destination address for submissions.
    ///
    /// Port 0 passes TOML deserialization but is not a dialable port, so it
    /// is rejected here rather than at connect time.
    pub fn server_address(&self) -> Result<ServerAddress> {
        if self.server.port == 0 {
            return Err(ConfigError::InvalidPort {
                port: self.server.port,
            });
        }

        Ok(ServerAddress::new(
            self.server.ip.clone(),
            self.server.port,
        ))
    }
}

/// Resolve the config file path from an environment variable, falling back
/// to a default relative path.
pub fn resolve_config_path(env_var: &str, default: &str) -> PathBuf {
    std::env::var(env_var)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_config(content: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sender.toml");
        fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn load_full_config() {
        let (_dir, path) = write_config(
            r#"
[server]
ip = "192.168.1.20"
port = 10051
version = "4.0"

[agent]
port = 10050
loglevel = "debug"
logfile = "trapwire.log"
"#,
        );

        let config = SenderConfig::load(&path).unwrap();

        assert_eq!(config.server.ip, "192.168.1.20");
        assert_eq!(config.server.port, 10051);
        assert_eq!(config.agent.loglevel, "debug");

        let address = config.server_address().unwrap();
        assert_eq!(address.to_string(), "192.168.1.20:10051");
    }

    #[test]
    fn loglevel_defaults_to_info() {
        let (_dir, path) = write_config(
            r#"
[server]
ip = "127.0.0.1"
port = 10051

[agent]
"#,
        );

        let config = SenderConfig::load(&path).unwrap();
        assert_eq!(config.agent.loglevel, "info");
        assert!(config.agent.logfile.is_none());
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("does_not_exist.toml");

        let err = SenderConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn malformed_schema_is_a_parse_error() {
        let (_dir, path) = write_config(
            r#"
[server]
ip = "127.0.0.1"
port = "not a number"

[agent]
"#,
        );

        let err = SenderConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn port_zero_is_rejected() {
        let (_dir, path) = write_config(
            r#"
[server]
ip = "127.0.0.1"
port = 0

[agent]
"#,
        );

        let config = SenderConfig::load(&path).unwrap();
        let err = config.server_address().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { port: 0 }));
    }

    #[test]
    fn resolve_path_prefers_env_var() {
        std::env::set_var("TRAPWIRE_TEST_CONFIG_PATH", "/tmp/override.toml");
        let path = resolve_config_path("TRAPWIRE_TEST_CONFIG_PATH", "configs/sender.toml");
        assert_eq!(path, PathBuf::from("/tmp/override.toml"));
        std::env::remove_var("TRAPWIRE_TEST_CONFIG_PATH");

        let path = resolve_config_path("TRAPWIRE_TEST_CONFIG_PATH", "configs/sender.toml");
        assert_eq!(path, PathBuf::from("configs/sender.toml"));
    }
}
