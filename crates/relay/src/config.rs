//! Relay configuration

use std::env;

/// Relay configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    /// Emit JSON log lines instead of human-readable ones
    pub json_logs: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_address = env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0:4000".to_string());
        if bind_address.parse::<std::net::SocketAddr>().is_err() {
            return Err(ConfigError::InvalidBindAddress(bind_address));
        }

        Ok(Self {
            bind_address,
            json_logs: env::var("LOG_FORMAT")
                .map(|format| format.eq_ignore_ascii_case("json"))
                .unwrap_or(false),
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_bind_address() {
        env::remove_var("BIND_ADDRESS");
        env::remove_var("LOG_FORMAT");
        let config = Config::from_env().unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:4000");
        assert!(!config.json_logs);

        env::set_var("BIND_ADDRESS", "not an address");
        assert!(matches!(
            Config::from_env(),
            Err(ConfigError::InvalidBindAddress(_))
        ));

        env::set_var("BIND_ADDRESS", "127.0.0.1:9000");
        env::set_var("LOG_FORMAT", "JSON");
        let config = Config::from_env().unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:9000");
        assert!(config.json_logs);

        env::remove_var("BIND_ADDRESS");
        env::remove_var("LOG_FORMAT");
    }
}
