use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

// Per-handle delivery queue constraints
pub const MIN_QUEUE_CAPACITY: usize = 1;
pub const MAX_QUEUE_CAPACITY: usize = 1000;
pub const DEFAULT_QUEUE_CAPACITY: usize = 10;

// Keepalive interval constraints (seconds)
pub const MIN_KEEPALIVE_INTERVAL_SECS: u64 = 1;
pub const MAX_KEEPALIVE_INTERVAL_SECS: u64 = 300;
pub const DEFAULT_KEEPALIVE_INTERVAL_SECS: u64 = 30;

// Outbound frame buffer between the loop and the HTTP body
pub const MIN_TRANSPORT_BUFFER_SIZE: usize = 1;
pub const MAX_TRANSPORT_BUFFER_SIZE: usize = 1000;
pub const DEFAULT_TRANSPORT_BUFFER_SIZE: usize = 16;

/// Event stream settings.
/// All values validated to be within reasonable operational ranges.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StreamConfig {
    /// Bounded queue capacity per subscriber handle
    pub queue_capacity: usize,
    /// Idle time before a keepalive ping is written
    pub keepalive_interval_secs: u64,
    /// Frames buffered between the connection loop and the response body
    pub transport_buffer_size: usize,
}

impl Default for StreamConfig {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
            keepalive_interval_secs: DEFAULT_KEEPALIVE_INTERVAL_SECS,
            transport_buffer_size: DEFAULT_TRANSPORT_BUFFER_SIZE,
        }
    }
}

impl StreamConfig {
    /// Validate all fields are within acceptable ranges.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.queue_capacity < MIN_QUEUE_CAPACITY || self.queue_capacity > MAX_QUEUE_CAPACITY {
            return Err(ConfigError::stream(format!(
                "stream.queue_capacity must be {}-{}, got {}",
                MIN_QUEUE_CAPACITY, MAX_QUEUE_CAPACITY, self.queue_capacity
            )));
        }

        if self.keepalive_interval_secs < MIN_KEEPALIVE_INTERVAL_SECS
            || self.keepalive_interval_secs > MAX_KEEPALIVE_INTERVAL_SECS
        {
            return Err(ConfigError::stream(format!(
                "stream.keepalive_interval_secs must be {}-{}, got {}",
                MIN_KEEPALIVE_INTERVAL_SECS,
                MAX_KEEPALIVE_INTERVAL_SECS,
                self.keepalive_interval_secs
            )));
        }

        if self.transport_buffer_size < MIN_TRANSPORT_BUFFER_SIZE
            || self.transport_buffer_size > MAX_TRANSPORT_BUFFER_SIZE
        {
            return Err(ConfigError::stream(format!(
                "stream.transport_buffer_size must be {}-{}, got {}",
                MIN_TRANSPORT_BUFFER_SIZE, MAX_TRANSPORT_BUFFER_SIZE, self.transport_buffer_size
            )));
        }

        Ok(())
    }
}
