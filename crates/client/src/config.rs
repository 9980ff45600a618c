//! Client configuration

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::presence::DEFAULT_QUIET_PERIOD;

/// Delay before the display surface scrolls to the newest message
pub const DEFAULT_SCROLL_SETTLE: Duration = Duration::from_millis(200);

/// How a sent message reaches the sender's own log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EchoPolicy {
    /// The relay echoes every publish to its sender; the echo is the commit
    #[default]
    RelayEcho,
    /// Append on publish and recognise the echo by event ID
    Optimistic,
}

impl FromStr for EchoPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "relay" | "relay_echo" | "echo" => Ok(EchoPolicy::RelayEcho),
            "optimistic" => Ok(EchoPolicy::Optimistic),
            _ => Err(ConfigError::Invalid("ECHO_POLICY")),
        }
    }
}

/// Tunables of a running chat session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOptions {
    pub typing_quiet_period: Duration,
    pub scroll_settle: Duration,
    pub echo_policy: EchoPolicy,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            typing_quiet_period: DEFAULT_QUIET_PERIOD,
            scroll_settle: DEFAULT_SCROLL_SETTLE,
            echo_policy: EchoPolicy::default(),
        }
    }
}

/// Client configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Relay
    pub relay_url: String,

    // Persistence; `None` keeps everything in memory
    pub storage_dir: Option<PathBuf>,

    // Invitation
    pub invitation: Option<String>,
    pub share_base_url: String,
    pub display_name: Option<String>,

    // Session
    pub session: SessionOptions,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            relay_url: env::var("RELAY_URL").unwrap_or_else(|_| "ws://localhost:4000/ws".to_string()),

            storage_dir: env::var("CHATBOX_STORAGE_DIR")
                .ok()
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),

            invitation: env::var("CHATBOX_HOST_ID")
                .ok()
                .filter(|id| !id.trim().is_empty()),
            share_base_url: env::var("SHARE_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000/".to_string()),
            display_name: env::var("CHATBOX_NAME")
                .ok()
                .filter(|name| !name.trim().is_empty()),

            session: SessionOptions {
                typing_quiet_period: Duration::from_millis(
                    env::var("TYPING_QUIET_PERIOD_MS")
                        .unwrap_or_else(|_| "1000".to_string())
                        .parse()
                        .unwrap_or(1000),
                ),
                scroll_settle: Duration::from_millis(
                    env::var("SCROLL_SETTLE_MS")
                        .unwrap_or_else(|_| "200".to_string())
                        .parse()
                        .unwrap_or(200),
                ),
                echo_policy: match env::var("ECHO_POLICY") {
                    Ok(value) => value.parse()?,
                    Err(_) => EchoPolicy::default(),
                },
            },
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
