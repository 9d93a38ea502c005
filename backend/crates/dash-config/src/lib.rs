mod auth_config;
mod config;
mod controller_config;
mod directory_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;

pub use auth_config::AuthConfig;
pub use config::Config;
pub use controller_config::ControllerConfig;
pub use directory_config::DirectoryConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;

const CONFIG_DIR_ENV: &str = "DASH_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".dash";
const CONFIG_FILENAME: &str = "config.toml";

// Server
const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;
const MIN_PORT: u16 = 1024;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024;
const MIN_MAX_UPLOAD_BYTES: usize = 1024;
const MAX_MAX_UPLOAD_BYTES: usize = 1024 * 1024 * 1024;

// Controller / directory RPC
const DEFAULT_CONTROLLER_HOST: &str = "127.0.0.1";
const DEFAULT_CONTROLLER_PORT: u16 = 17443;
const DEFAULT_DIRECTORY_PORT: u16 = 4343;
const DEFAULT_MONITOR_PORT: u16 = 8050;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;
const MAX_REQUEST_TIMEOUT_SECS: u64 = 600;

// Logging
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

#[cfg(test)]
mod tests;
