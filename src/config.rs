#![cfg(feature = "std")]

use std::string::{String, ToString};
use std::time::Duration;

pub use crate::core::config::{MAX_FIELD_SIZE, MIN_FIELD_SIZE};

/// Default address the server listens on.
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

/// Default timeout for a single send or receive.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default cap on a frame body (1 MiB).
pub const DEFAULT_MAX_MESSAGE_SIZE: u32 = 1 << 20;

/// Runtime settings of the field server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind: String,
    /// Timeout for a single frame read or write.
    pub timeout: Duration,
    /// Largest accepted frame body in bytes.
    pub max_message_size: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            timeout: DEFAULT_TIMEOUT,
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
        }
    }
}
