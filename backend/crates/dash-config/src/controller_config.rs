use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CONTROLLER_HOST, DEFAULT_CONTROLLER_PORT,
    DEFAULT_MONITOR_PORT, DEFAULT_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS,
    MIN_REQUEST_TIMEOUT_SECS,
};

use serde::Deserialize;

/// Where the cluster controller listens.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    pub host: String,
    pub port: u16,
    /// Port of the monitoring service on the head node
    pub monitor_port: u16,
    pub request_timeout_secs: u64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_CONTROLLER_HOST),
            port: DEFAULT_CONTROLLER_PORT,
            monitor_port: DEFAULT_MONITOR_PORT,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ControllerConfig {
    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::controller("controller.host cannot be empty"));
        }
        if self.port == 0 {
            return Err(ConfigError::controller("controller.port cannot be 0"));
        }
        if self.monitor_port == 0 {
            return Err(ConfigError::controller("controller.monitor_port cannot be 0"));
        }
        if self.request_timeout_secs < MIN_REQUEST_TIMEOUT_SECS
            || self.request_timeout_secs > MAX_REQUEST_TIMEOUT_SECS
        {
            return Err(ConfigError::controller(format!(
                "controller.request_timeout_secs must be {}-{}, got {}",
                MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS, self.request_timeout_secs
            )));
        }

        Ok(())
    }
}
