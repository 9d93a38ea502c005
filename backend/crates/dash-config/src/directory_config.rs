use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_DIRECTORY_PORT, DEFAULT_REQUEST_TIMEOUT_SECS,
    MAX_REQUEST_TIMEOUT_SECS, MIN_REQUEST_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Where the user directory listens.
///
/// With no `host`, the controller is asked which node runs the directory.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DirectoryConfig {
    pub host: Option<String>,
    pub port: u16,
    pub request_timeout_secs: u64,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            host: None,
            port: DEFAULT_DIRECTORY_PORT,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl DirectoryConfig {
    pub fn base_url(&self, host: &str) -> String {
        format!("http://{}:{}", host, self.port)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if let Some(ref host) = self.host
            && host.trim().is_empty()
        {
            return Err(ConfigError::directory(
                "directory.host cannot be empty (omit it to ask the controller)",
            ));
        }
        if self.port == 0 {
            return Err(ConfigError::directory("directory.port cannot be 0"));
        }
        if self.request_timeout_secs < MIN_REQUEST_TIMEOUT_SECS
            || self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS
        {
            return Err(ConfigError::directory(format!(
                "directory.request_timeout_secs must be {}-{}, got {}",
                MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS, self.request_timeout_secs
            )));
        }

        Ok(())
    }
}
