// Server configuration
// All settings are fixed in code; there is no config file, environment
// variable, or CLI surface. The embedding caller builds a `ServerConfig`
// (usually `Default`) and hands it to `start_server`.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Server configuration, constructed in code by the embedding caller.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// File served at `/`, read from disk on every request.
    pub static_file: PathBuf,
    /// Sent verbatim as the `Content-Type` of successful responses.
    pub content_type: String,
    /// Per-request access logging; off by default so the startup line is the
    /// only output of a default run.
    pub access_log: bool,
    pub read_timeout: u64,
    pub write_timeout: u64,
    pub max_connections: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            static_file: PathBuf::from("octocat.txt"),
            content_type: "text/plain".to_string(),
            access_log: false,
            read_timeout: 30,
            write_timeout: 30,
            max_connections: None,
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }

    /// Whole-connection serve timeout, the larger of the two bounds.
    pub fn connection_timeout(&self) -> Duration {
        Duration::from_secs(std::cmp::max(self.read_timeout, self.write_timeout))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_deployment() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.content_type, "text/plain");
        assert_eq!(config.static_file, PathBuf::from("octocat.txt"));
        assert!(!config.access_log);
        assert!(config.max_connections.is_none());
    }

    #[test]
    fn socket_addr_resolves_defaults() {
        let addr = ServerConfig::default().socket_addr().unwrap();
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn socket_addr_rejects_bad_host() {
        let config = ServerConfig {
            host: "not a host".to_string(),
            ..ServerConfig::default()
        };
        assert!(config.socket_addr().is_err());
    }

    #[test]
    fn connection_timeout_uses_larger_bound() {
        let config = ServerConfig {
            read_timeout: 10,
            write_timeout: 45,
            ..ServerConfig::default()
        };
        assert_eq!(config.connection_timeout(), Duration::from_secs(45));
    }
}
