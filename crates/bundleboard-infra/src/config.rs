//! Server configuration loader.
//!
//! Reads `config.toml` from the data directory and deserializes it into
//! [`ServerConfig`]. Falls back to defaults when the file is missing or
//! malformed.

use std::path::Path;

use bundleboard_types::config::ServerConfig;

/// Load server configuration from `{data_dir}/config.toml`.
///
/// - If the file does not exist, returns [`ServerConfig::default()`].
/// - If the file exists but fails to read or parse, logs a warning and
///   returns the default.
pub async fn load_server_config(data_dir: &Path) -> ServerConfig {
    let config_path = data_dir.join("config.toml");

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("no config.toml at {}, falling back to defaults", config_path.display());
            return ServerConfig::default();
        }
        Err(err) => {
            tracing::warn!("could not read {}: {err}; falling back to defaults", config_path.display());
            return ServerConfig::default();
        }
    };

    match toml::from_str::<ServerConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "config.toml at {} did not parse: {err}; falling back to defaults",
                config_path.display()
            );
            ServerConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_server_config(tmp.path()).await;
        assert_eq!(config.port, 8000);
        assert_eq!(config.host, "127.0.0.1");
    }

    #[tokio::test]
    async fn valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(
            tmp.path().join("config.toml"),
            "host = \"0.0.0.0\"\nport = 9001\ndata_file = \"/srv/bundles.json\"\n",
        )
        .await
        .unwrap();

        let config = load_server_config(tmp.path()).await;
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 9001);
        assert_eq!(
            config.data_file.as_deref(),
            Some(Path::new("/srv/bundles.json"))
        );
    }

    #[tokio::test]
    async fn malformed_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        tokio::fs::write(tmp.path().join("config.toml"), "port = \"not a number")
            .await
            .unwrap();

        let config = load_server_config(tmp.path()).await;
        assert_eq!(config.port, 8000);
    }
}
