use sp_config::{DEFAULT_QUEUE_CAPACITY, StreamConfig};

/// Configuration for the subscriber hub
#[derive(Debug, Clone)]
pub struct HubConfig {
    /// Bounded queue capacity per subscriber handle
    pub queue_capacity: usize,
}

impl Default for HubConfig {
    fn default() -> Self {
        Self {
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

impl From<&StreamConfig> for HubConfig {
    fn from(config: &StreamConfig) -> Self {
        Self {
            queue_capacity: config.queue_capacity,
        }
    }
}
