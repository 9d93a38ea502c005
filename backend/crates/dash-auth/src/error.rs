use std::string::FromUtf8Error;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid identity '{identity}': {message} {location}")]
    InvalidIdentity {
        identity: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid application name '{name}': {message} {location}")]
    InvalidApplicationName {
        name: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Malformed credential: {message} {location}")]
    MalformedCredential {
        message: String,
        location: ErrorLocation,
    },

    #[error("Credential digest mismatch for {identity} {location}")]
    DigestMismatch {
        identity: String,
        location: ErrorLocation,
    },

    #[error("Credential is not valid UTF-8 after decoding: {source} {location}")]
    Decode {
        #[source]
        source: FromUtf8Error,
        location: ErrorLocation,
    },

    #[error("Session cannot go from {from} on {event} {location}")]
    InvalidTransition {
        from: String,
        event: String,
        location: ErrorLocation,
    },
}

impl AuthError {
    /// Machine-readable code for API responses
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidIdentity { .. } => "INVALID_IDENTITY",
            Self::InvalidApplicationName { .. } => "INVALID_APPLICATION_NAME",
            Self::MalformedCredential { .. } => "MALFORMED_CREDENTIAL",
            Self::DigestMismatch { .. } => "DIGEST_MISMATCH",
            Self::Decode { .. } => "CREDENTIAL_DECODE_FAILED",
            Self::InvalidTransition { .. } => "INVALID_SESSION_TRANSITION",
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
