//! Runtime configuration from command line flags and environment variables

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tracing::debug;

use crate::connector::{ConnectorConfig, DEFAULT_UPSTREAM_URL};
use crate::error::ConfigError;
use crate::history::DEFAULT_CAPACITY;

/// Relay a live flight plan feed into a polling HTTP API.
#[derive(Parser, Debug, Clone)]
#[command(name = "flight-relay", version)]
#[command(about = "Relays a live flight plan WebSocket feed over HTTP", long_about = None)]
pub struct Config {
    /// Port for the HTTP API.
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Address to bind the HTTP API to.
    #[arg(long, env = "BIND_HOST", default_value = "0.0.0.0")]
    pub bind_host: String,

    /// WebSocket endpoint of the flight plan feed.
    #[arg(long, env = "UPSTREAM_URL", default_value = DEFAULT_UPSTREAM_URL)]
    pub upstream_url: String,

    /// Number of flight plans kept in history.
    #[arg(long, env = "HISTORY_CAPACITY", default_value_t = DEFAULT_CAPACITY)]
    pub history_capacity: usize,

    /// Directory served for paths outside the API (skipped if missing).
    #[arg(long, env = "STATIC_DIR", default_value = "public")]
    pub static_dir: PathBuf,

    /// Reconnect with exponential backoff after the upstream closes or errors.
    #[arg(long, env = "UPSTREAM_RECONNECT", default_value_t = false)]
    pub reconnect: bool,

    /// Give up on the upstream handshake after this many seconds.
    #[arg(long, env = "UPSTREAM_CONNECT_TIMEOUT_SECS")]
    pub connect_timeout_secs: Option<u64>,
}

impl Config {
    /// Reject values the relay cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        let url = self.upstream_url.to_ascii_lowercase();
        if !(url.starts_with("ws://") || url.starts_with("wss://")) {
            return Err(ConfigError::UnsupportedScheme(self.upstream_url.clone()));
        }
        if self.connect_timeout_secs == Some(0) {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(())
    }

    /// Socket address for the HTTP listener
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.port)
    }

    pub fn connector_config(&self) -> ConnectorConfig {
        ConnectorConfig {
            reconnect: self.reconnect,
            connect_timeout: self.connect_timeout_secs.map(Duration::from_secs),
            ..ConnectorConfig::new(self.upstream_url.clone())
        }
    }

    /// Static directory, if it exists
    pub fn static_dir(&self) -> Option<PathBuf> {
        if self.static_dir.is_dir() {
            Some(self.static_dir.clone())
        } else {
            debug!(dir = %self.static_dir.display(), "static directory not found, not serving assets");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let mut argv = vec!["flight-relay"];
        argv.extend_from_slice(args);
        Config::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_explicit_flags() {
        let config = parse(&[
            "--port",
            "8080",
            "--bind-host",
            "127.0.0.1",
            "--upstream-url",
            "ws://localhost:9000/feed",
            "--history-capacity",
            "5",
            "--reconnect",
            "--connect-timeout-secs",
            "10",
        ]);

        assert!(config.validate().is_ok());
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
        assert_eq!(config.history_capacity, 5);

        let connector = config.connector_config();
        assert_eq!(connector.url, "ws://localhost:9000/feed");
        assert!(connector.reconnect);
        assert_eq!(connector.connect_timeout, Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_validation_errors() {
        let config = parse(&["--history-capacity", "0", "--upstream-url", "wss://x"]);
        assert_eq!(config.validate(), Err(ConfigError::ZeroCapacity));

        let config = parse(&["--history-capacity", "20", "--upstream-url", "https://x"]);
        assert_eq!(
            config.validate(),
            Err(ConfigError::UnsupportedScheme("https://x".to_string()))
        );

        let config = parse(&[
            "--history-capacity",
            "20",
            "--upstream-url",
            "wss://x",
            "--connect-timeout-secs",
            "0",
        ]);
        assert_eq!(config.validate(), Err(ConfigError::ZeroTimeout));
    }

    #[test]
    fn test_missing_static_dir_is_skipped() {
        let mut config = parse(&["--static-dir", "/definitely/not/here"]);
        assert_eq!(config.static_dir(), None);

        let dir = tempfile::tempdir().unwrap();
        config.static_dir = dir.path().to_path_buf();
        assert_eq!(config.static_dir(), Some(dir.path().to_path_buf()));
    }
}
