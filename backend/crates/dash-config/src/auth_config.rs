use crate::{ConfigError, ConfigErrorResult};

use dash_auth::DEFAULT_COOKIE_NAME;

use std::path::Path;

use serde::Deserialize;

/// Shared secret and session cookie settings.
///
/// The secret comes from exactly one of `shared_secret` (inline) or
/// `secret_file` (path relative to the config directory).
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    pub shared_secret: Option<String>,
    pub secret_file: Option<String>,
    pub cookie_name: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            shared_secret: None,
            secret_file: None,
            cookie_name: String::from(DEFAULT_COOKIE_NAME),
        }
    }
}

impl AuthConfig {
    pub fn validate(&self, config_dir: &Path) -> ConfigErrorResult<()> {
        match (&self.shared_secret, &self.secret_file) {
            (None, None) => {
                return Err(ConfigError::auth(
                    "one of auth.shared_secret or auth.secret_file is required",
                ));
            }
            (Some(_), Some(_)) => {
                return Err(ConfigError::auth(
                    "auth.shared_secret and auth.secret_file are mutually exclusive",
                ));
            }
            (Some(secret), None) => {
                if secret.trim().is_empty() {
                    return Err(ConfigError::auth("auth.shared_secret cannot be empty"));
                }
            }
            (None, Some(file)) => {
                let path = Path::new(file);
                if path.is_absolute() {
                    return Err(ConfigError::auth(
                        "auth.secret_file must be a relative path (relative to config dir)",
                    ));
                }
                if file.contains("..") {
                    return Err(ConfigError::auth(
                        "auth.secret_file cannot contain '..' (path traversal)",
                    ));
                }
                let full_path = config_dir.join(path);
                if !full_path.exists() {
                    return Err(ConfigError::auth(format!(
                        "auth.secret_file does not exist: {}",
                        full_path.display()
                    )));
                }
            }
        }

        if self.cookie_name.is_empty()
            || self
                .cookie_name
                .chars()
                .any(|c| c.is_whitespace() || matches!(c, ';' | '=' | ','))
        {
            return Err(ConfigError::auth(format!(
                "auth.cookie_name is not a valid cookie name: '{}'",
                self.cookie_name
            )));
        }

        Ok(())
    }
}
