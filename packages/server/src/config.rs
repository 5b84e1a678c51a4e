//! Server configuration.

use std::time::Duration;

/// Default interval between two sweeps of inactive participants
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(15);
/// Default time without heartbeat after which a participant is evicted
pub const DEFAULT_INACTIVITY_TIMEOUT: Duration = Duration::from_secs(10);

/// Runtime configuration of the chat server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// The host address to bind to (e.g., "127.0.0.1")
    pub host: String,
    /// The port number to bind to (e.g., 5000)
    pub port: u16,
    /// How often the sweeper runs
    pub sweep_interval: Duration,
    /// How long a participant may stay silent before being evicted
    pub inactivity_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
            inactivity_timeout: DEFAULT_INACTIVITY_TIMEOUT,
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
