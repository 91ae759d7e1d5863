use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_HOST, DEFAULT_MAX_STREAMS, DEFAULT_PORT,
    MAX_MAX_STREAMS, MIN_MAX_STREAMS, MIN_PORT,
};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Maximum concurrent event streams across all users
    pub max_streams: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_HOST),
            port: DEFAULT_PORT,
            max_streams: DEFAULT_MAX_STREAMS,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        // Port 0 means "auto-assign" - OS picks an available port.
        if self.port != 0 && self.port < MIN_PORT {
            return Err(ConfigError::server(format!(
                "server.port must be 0 (auto) or >= {}, got {}",
                MIN_PORT, self.port
            )));
        }

        if self.host.trim().is_empty() {
            return Err(ConfigError::server("server.host cannot be empty"));
        }

        if self.max_streams < MIN_MAX_STREAMS || self.max_streams > MAX_MAX_STREAMS {
            return Err(ConfigError::server(format!(
                "server.max_streams must be {}-{}, got {}",
                MIN_MAX_STREAMS, MAX_MAX_STREAMS, self.max_streams
            )));
        }

        Ok(())
    }
}
