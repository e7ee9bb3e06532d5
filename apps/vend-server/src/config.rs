//! Server configuration.
//!
//! Every option can be given as a command-line flag or an environment
//! variable; the flag wins when both are set.
//!
//! | Flag          | Env var        | Default   |
//! |---------------|----------------|-----------|
//! | `--port`      | `VEND_PORT`    | `8080`    |
//! | `--bind`      | `VEND_BIND`    | `0.0.0.0` |
//! | `--no-seed`   | `VEND_NO_SEED` | `false`   |
//! | `--log-level` | `VEND_LOG`     | see [`DEFAULT_LOG_FILTER`] |
//!
//! `RUST_LOG` overrides `--log-level` entirely.

use clap::Parser;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Tracing filter used when neither `RUST_LOG` nor `--log-level` is set.
pub const DEFAULT_LOG_FILTER: &str = "info,vend_server=debug,vend_store=debug,tower_http=debug";

/// Configuration for the HTTP server.
#[derive(Debug, Clone, Parser)]
#[command(name = "vend-server", version, about = "Vend POS catalog and sales API")]
pub struct ServerConfig {
    /// Port to listen on.
    #[arg(long, env = "VEND_PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Bind address.
    #[arg(long = "bind", env = "VEND_BIND", default_value = "0.0.0.0")]
    pub bind_addr: String,

    /// Start with an empty catalog instead of the demo products.
    #[arg(long, env = "VEND_NO_SEED")]
    pub no_seed: bool,

    /// Tracing filter directive, e.g. `info,vend_store=trace`.
    #[arg(long, env = "VEND_LOG", default_value = DEFAULT_LOG_FILTER)]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            port: DEFAULT_PORT,
            bind_addr: "0.0.0.0".to_string(),
            no_seed: false,
            log_level: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl ServerConfig {
    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_addr, "0.0.0.0");
        assert!(!config.no_seed);
    }

    #[test]
    fn test_config_bind_address() {
        let config = ServerConfig {
            port: 9000,
            bind_addr: "127.0.0.1".to_string(),
            ..Default::default()
        };
        assert_eq!(config.bind_address(), "127.0.0.1:9000");
    }

    #[test]
    fn test_parse_flags() {
        let config = ServerConfig::try_parse_from([
            "vend-server",
            "--port",
            "3000",
            "--bind",
            "127.0.0.1",
            "--no-seed",
        ])
        .unwrap();

        assert_eq!(config.port, 3000);
        assert_eq!(config.bind_addr, "127.0.0.1");
        assert!(config.no_seed);
    }

    #[test]
    fn test_parse_rejects_bad_port() {
        assert!(ServerConfig::try_parse_from(["vend-server", "--port", "70000"]).is_err());
        assert!(ServerConfig::try_parse_from(["vend-server", "--port", "http"]).is_err());
    }
}
