pub mod error;
pub mod identity;
pub mod password;
pub mod session_cookie;
pub mod session_credential;
pub mod session_state;
pub mod shared_secret;

pub use error::{AuthError, Result};
pub use identity::Identity;
pub use password::{constant_time_eq, encrypt_password, password_matches};
pub use session_cookie::{CookieUpdate, SessionCookie, cookie_value};
pub use session_credential::{SessionCredential, build_credential, compute_digest};
pub use session_state::{SessionEvent, SessionState};
pub use shared_secret::SharedSecret;

/// Cookie the app servers read the login credential from.
pub const DEFAULT_COOKIE_NAME: &str = "dev_appserver_login";

/// Token recorded by the directory when a session is revoked.
pub const INVALID_TOKEN: &str = "invalid";

/// Expiration string stored alongside every committed login token.
pub const TOKEN_EXPIRATION: &str = "20121231120000";

/// Lifetime of the session cookie.
pub const SESSION_TTL_DAYS: i64 = 1;

/// Separates the four credential fields.
pub const FIELD_DELIMITER: &str = ":";

/// Separates application names inside the credential.
pub const APP_DELIMITER: &str = ",";

#[cfg(test)]
mod tests;
