//! Server configuration types.
//!
//! `ServerConfig` represents the optional `config.toml` in the data
//! directory. All fields have defaults so the file can be absent or partial.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration for the Bundleboard server.
///
/// Loaded from `{data_dir}/config.toml`. CLI flags override these values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface the HTTP server binds to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port the HTTP server listens on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path to the bundles data file. Defaults to `bundles.json` in the
    /// data directory when unset.
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            data_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_listen_address() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8000);
        assert!(config.data_file.is_none());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: ServerConfig = toml::from_str("port = 9090").unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.host, "127.0.0.1");
    }
}
