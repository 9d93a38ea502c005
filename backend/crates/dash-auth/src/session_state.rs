use crate::{AuthError, Result as AuthErrorResult};

use std::fmt;
use std::panic::Location;

use error_location::ErrorLocation;
use serde::Serialize;

/// Server-observed login state of one identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// Password matched or an account was just created.
    LoginSucceeded,
    /// A new credential was built for an already logged-in identity.
    CredentialReissued,
    /// The sentinel token was committed and the cookie removed.
    Revoked,
}

impl SessionState {
    #[track_caller]
    pub fn transition(self, event: SessionEvent) -> AuthErrorResult<Self> {
        match (self, event) {
            (_, SessionEvent::LoginSucceeded) => Ok(Self::LoggedIn),
            (Self::LoggedIn, SessionEvent::CredentialReissued) => Ok(Self::LoggedIn),
            (Self::LoggedIn, SessionEvent::Revoked) => Ok(Self::LoggedOut),
            (from, event) => Err(AuthError::InvalidTransition {
                from: from.to_string(),
                event: format!("{event:?}"),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }

    pub fn is_logged_in(self) -> bool {
        self == Self::LoggedIn
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoggedOut => f.write_str("logged_out"),
            Self::LoggedIn => f.write_str("logged_in"),
        }
    }
}
