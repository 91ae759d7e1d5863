use sp_config::{DEFAULT_KEEPALIVE_INTERVAL_SECS, DEFAULT_TRANSPORT_BUFFER_SIZE, StreamConfig};

use std::time::Duration;

/// Configuration for event stream connections
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Idle time before a `ping` frame is written
    pub keepalive_interval_secs: u64,
    /// Frames buffered between the connection loop and the response body
    pub transport_buffer_size: usize,
}

impl ConnectionConfig {
    pub fn keepalive_interval(&self) -> Duration {
        Duration::from_secs(self.keepalive_interval_secs.max(1))
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            keepalive_interval_secs: DEFAULT_KEEPALIVE_INTERVAL_SECS,
            transport_buffer_size: DEFAULT_TRANSPORT_BUFFER_SIZE,
        }
    }
}

impl From<&StreamConfig> for ConnectionConfig {
    fn from(config: &StreamConfig) -> Self {
        Self {
            keepalive_interval_secs: config.keepalive_interval_secs,
            transport_buffer_size: config.transport_buffer_size,
        }
    }
}
