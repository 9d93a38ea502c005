
use std::env;

use tempfile::TempDir;

/// Sets an environment variable for the life of the guard, then restores it.
pub(crate) struct EnvGuard {
    key: &'static str,
    original: Option<String>,
}

impl EnvGuard {
    pub(crate) fn set(key: &'static str, value: &str) -> Self {
        let original = env::var(key).ok();
        // Tests touching the environment are #[serial].
        unsafe { env::set_var(key, value) };
        Self { key, original }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        unsafe {
            match &self.original {
                Some(val) => env::set_var(self.key, val),
                None => env::remove_var(self.key),
            }
        }
    }
}

/// Temp config directory pointed to by DASH_CONFIG_DIR
pub(crate) fn setup_config_dir() -> (TempDir, EnvGuard) {
    let temp = TempDir::new().unwrap();
    let guard = EnvGuard::set("DASH_CONFIG_DIR", temp.path().to_str().unwrap());
    (temp, guard)
}

/// Temp config directory plus an inline shared secret, enough to validate
pub(crate) fn setup_valid_config_dir() -> (TempDir, EnvGuard, EnvGuard) {
    let (temp, dir_guard) = setup_config_dir();
    let secret_guard = EnvGuard::set("DASH_AUTH_SHARED_SECRET", "cluster-secret");
    (temp, dir_guard, secret_guard)
}
