use dash_auth::{DEFAULT_COOKIE_NAME, SharedSecret};
use dash_rpc::{ControllerService, DirectoryService};

use std::sync::Arc;

/// Settings the helper needs beyond the two services.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HelperSettings {
    pub cookie_name: String,
    pub monitor_port: u16,
}

impl Default for HelperSettings {
    fn default() -> Self {
        Self {
            cookie_name: DEFAULT_COOKIE_NAME.to_string(),
            monitor_port: 8050,
        }
    }
}

/// Process-wide collaborators, built once at startup and shared by every request.
#[derive(Clone)]
pub struct Backends {
    pub controller: Arc<dyn ControllerService>,
    pub directory: Arc<dyn DirectoryService>,
    pub secret: SharedSecret,
    pub settings: HelperSettings,
}

impl Backends {
    pub fn new(
        controller: Arc<dyn ControllerService>,
        directory: Arc<dyn DirectoryService>,
        secret: SharedSecret,
        settings: HelperSettings,
    ) -> Self {
        Self {
            controller,
            directory,
            secret,
            settings,
        }
    }
}

impl std::fmt::Debug for Backends {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Backends")
            .field("secret", &self.secret)
            .field("settings", &self.settings)
            .finish()
    }
}
