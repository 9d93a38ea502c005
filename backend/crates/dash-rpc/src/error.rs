use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failure of a call to the controller or the directory.
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("Transport error calling {method}: {message} {location}")]
    Transport {
        method: String,
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Remote fault from {method}: {message} {location}")]
    Fault {
        method: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Unexpected HTTP status {status} from {method} {location}")]
    Status {
        method: String,
        status: u16,
        location: ErrorLocation,
    },

    #[error("Could not decode {method} response: {message} {location}")]
    Decode {
        method: String,
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Response to {method} carried neither a result nor a fault {location}")]
    MissingResult {
        method: String,
        location: ErrorLocation,
    },
}

impl RpcError {
    #[track_caller]
    pub fn transport(method: &str, err: reqwest::Error) -> Self {
        RpcError::Transport {
            method: method.to_string(),
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn decode(method: &str, err: serde_json::Error) -> Self {
        RpcError::Decode {
            method: method.to_string(),
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn fault<S: Into<String>>(method: &str, message: S) -> Self {
        RpcError::Fault {
            method: method.to_string(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True when the remote service answered, but with a fault or an error status.
    pub fn is_remote_answer(&self) -> bool {
        matches!(self, Self::Fault { .. } | Self::Status { .. })
    }
}

pub type Result<T> = std::result::Result<T, RpcError>;
