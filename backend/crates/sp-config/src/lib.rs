mod auth_config;
mod config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod stream_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use stream_config::{
    DEFAULT_KEEPALIVE_INTERVAL_SECS, DEFAULT_QUEUE_CAPACITY, DEFAULT_TRANSPORT_BUFFER_SIZE,
    MAX_KEEPALIVE_INTERVAL_SECS, MAX_QUEUE_CAPACITY, MAX_TRANSPORT_BUFFER_SIZE,
    MIN_KEEPALIVE_INTERVAL_SECS, MIN_QUEUE_CAPACITY, MIN_TRANSPORT_BUFFER_SIZE, StreamConfig,
};

#[cfg(test)]
mod tests;

const CONFIG_DIR_ENV: &str = "SP_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".sp";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;

const DEFAULT_MAX_STREAMS: usize = 10_000;
const MIN_MAX_STREAMS: usize = 1;
const MAX_MAX_STREAMS: usize = 100_000;

const DEFAULT_AUTH_ENABLED: bool = false;
const MIN_JWT_SECRET_LENGTH: usize = 32;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;
