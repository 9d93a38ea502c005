use crate::{AuthError, FIELD_DELIMITER, Result as AuthErrorResult};

use std::fmt;
use std::panic::Location;

use error_location::ErrorLocation;

/// An externally authenticated email address.
///
/// Always contains exactly one `@` and never the credential field delimiter,
/// so it can be embedded in a session credential as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identity(String);

impl Identity {
    #[track_caller]
    pub fn parse<S: Into<String>>(value: S) -> AuthErrorResult<Self> {
        let value = value.into();

        if value.is_empty() {
            return Err(Self::invalid(value, "identity cannot be empty"));
        }
        if value.matches('@').count() != 1 {
            return Err(Self::invalid(value, "identity must contain exactly one '@'"));
        }
        if value.contains(FIELD_DELIMITER) {
            return Err(Self::invalid(
                value,
                format!("identity cannot contain '{FIELD_DELIMITER}'"),
            ));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Local part of the address (everything before the `@`).
    pub fn nickname(&self) -> &str {
        self.0.split_once('@').map(|(local, _)| local).unwrap_or("")
    }

    #[track_caller]
    fn invalid<M: Into<String>>(identity: String, message: M) -> AuthError {
        AuthError::InvalidIdentity {
            identity,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
