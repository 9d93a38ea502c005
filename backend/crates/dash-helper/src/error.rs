use dash_auth::AuthError;
use dash_rpc::RpcError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HelperError {
    #[error("{operation} failed: {source} {location}")]
    Remote {
        operation: &'static str,
        #[source]
        source: RpcError,
        location: ErrorLocation,
    },

    #[error("Validation failed: {message}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Not found: {message}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Failure whose message is meant to be shown to the user as is.
    #[error("{message}")]
    Domain {
        message: String,
        location: ErrorLocation,
    },

    #[error("Authentication error: {source} {location}")]
    Auth {
        #[source]
        source: AuthError,
        location: ErrorLocation,
    },
}

impl HelperError {
    #[track_caller]
    pub fn remote(operation: &'static str, source: RpcError) -> Self {
        Self::Remote {
            operation,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        Self::Validation {
            message: message.into(),
            field: field.map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn domain<S: Into<String>>(message: S) -> Self {
        Self::Domain {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Remote { .. } => "REMOTE_CALL_FAILED",
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Domain { .. } => "OPERATION_FAILED",
            Self::Auth { source, .. } => source.error_code(),
        }
    }
}

impl From<AuthError> for HelperError {
    #[track_caller]
    fn from(source: AuthError) -> Self {
        Self::Auth {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, HelperError>;
