use crate::{
    AuthConfig, CONFIG_DIR_ENV, CONFIG_FILENAME, ConfigError, ConfigErrorResult,
    ControllerConfig, DEFAULT_CONFIG_DIR, DirectoryConfig, LoggingConfig, ServerConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub controller: ControllerConfig,
    pub directory: DirectoryConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration.
    ///
    /// Loading order:
    /// 1. DASH_CONFIG_DIR env var, else ./.dash/
    /// 2. config.toml from that directory if it exists, else defaults
    /// 3. DASH_* environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_path = Self::config_dir()?.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Priority: DASH_CONFIG_DIR env var > ./.dash/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(DEFAULT_CONFIG_DIR))
    }

    /// Validate all sections. Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        let config_dir = Self::config_dir()?;

        self.server.validate()?;
        self.controller.validate()?;
        self.directory.validate()?;
        self.auth.validate(&config_dir)?;
        self.logging.validate()?;

        Ok(())
    }

    /// Resolve the shared secret from the inline value or the secret file.
    pub fn shared_secret(&self) -> ConfigErrorResult<String> {
        if let Some(ref secret) = self.auth.shared_secret {
            return Ok(secret.clone());
        }

        let Some(ref file) = self.auth.secret_file else {
            return Err(ConfigError::auth("no shared secret configured"));
        };

        let path = Self::config_dir()?.join(file);
        let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        let secret = contents.trim();
        if secret.is_empty() {
            return Err(ConfigError::auth(format!(
                "secret file is empty: {}",
                path.display()
            )));
        }

        Ok(secret.to_string())
    }

    /// Absolute path of the log file, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref file) => Ok(Some(
                Self::config_dir()?.join(&self.logging.dir).join(file),
            )),
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} (max upload {} bytes)",
            self.server.host, self.server.port, self.server.max_upload_bytes
        );
        info!(
            "  controller: {} (timeout {}s, monitor port {})",
            self.controller.base_url(),
            self.controller.request_timeout_secs,
            self.controller.monitor_port
        );
        info!(
            "  directory: {}:{} (timeout {}s)",
            self.directory.host.as_deref().unwrap_or("<from controller>"),
            self.directory.port,
            self.directory.request_timeout_secs
        );

        let secret_source = if self.auth.shared_secret.is_some() {
            "inline"
        } else if self.auth.secret_file.is_some() {
            "file"
        } else {
            "missing"
        };
        info!(
            "  auth: secret={}, cookie={}",
            secret_source, self.auth.cookie_name
        );

        info!(
            "  logging: {} (colored: {}, file: {})",
            self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("DASH_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("DASH_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse(
            "DASH_SERVER_MAX_UPLOAD_BYTES",
            &mut self.server.max_upload_bytes,
        );

        // Controller
        Self::apply_env_string("DASH_CONTROLLER_HOST", &mut self.controller.host);
        Self::apply_env_parse("DASH_CONTROLLER_PORT", &mut self.controller.port);
        Self::apply_env_parse(
            "DASH_CONTROLLER_MONITOR_PORT",
            &mut self.controller.monitor_port,
        );
        Self::apply_env_parse(
            "DASH_CONTROLLER_TIMEOUT_SECS",
            &mut self.controller.request_timeout_secs,
        );

        // Directory
        Self::apply_env_option_string("DASH_DIRECTORY_HOST", &mut self.directory.host);
        Self::apply_env_parse("DASH_DIRECTORY_PORT", &mut self.directory.port);
        Self::apply_env_parse(
            "DASH_DIRECTORY_TIMEOUT_SECS",
            &mut self.directory.request_timeout_secs,
        );

        // Auth
        Self::apply_env_option_string("DASH_AUTH_SHARED_SECRET", &mut self.auth.shared_secret);
        Self::apply_env_option_string("DASH_AUTH_SECRET_FILE", &mut self.auth.secret_file);
        Self::apply_env_string("DASH_AUTH_COOKIE_NAME", &mut self.auth.cookie_name);

        // Logging
        Self::apply_env_parse("DASH_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("DASH_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("DASH_LOG_FILE", &mut self.logging.file);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"; anything else is false
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values leave the target untouched
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
