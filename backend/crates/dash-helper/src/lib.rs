//! Request-scoped glue between the dashboard's HTTP surface and the
//! cluster controller / user directory.

pub mod apps;
pub mod backends;
pub mod cluster;
pub mod error;
pub mod helper;
pub mod permissions;
pub mod request_cache;
pub mod session;
pub mod users;

pub use backends::{Backends, HelperSettings};
pub use error::{HelperError, Result as HelperResult};
pub use helper::DashboardHelper;
pub use permissions::{PERMISSION_ITEMS, UserPermissions};
pub use request_cache::RequestCache;

/// Role of the head node in the controller's topology.
pub const HEAD_NODE_ROLE: &str = "shadow";

/// Role of the node that fronts hosted applications.
pub const LOGIN_ROLE: &str = "login";

/// Account type used when the caller does not name one.
pub const DEFAULT_ACCOUNT_TYPE: &str = "xmpp_user";

/// Capability that allows uploading applications.
pub const UPLOAD_CAPABILITY: &str = "upload_app";

pub const UPLOAD_SUCCESS_MESSAGE: &str =
    "Application uploaded successfully.  Please wait for the application to start running.";
pub const UPLOAD_FAILED_MESSAGE: &str = "There was an error uploading your application.";
pub const UPLOAD_LOGIN_REQUIRED_MESSAGE: &str =
    "There was an error uploading your application.  You must be logged in.";

pub const APP_NOT_RUNNING_MESSAGE: &str = "The given application is not currently running.";
pub const APP_REMOVED_MESSAGE: &str =
    "Application removed successfully. Please wait for your app to shut down.";
pub const APP_REMOVE_FAILED_MESSAGE: &str =
    "There was an error attempting to remove the application.";

pub const ACCOUNT_FAILED_MESSAGE: &str = "There was an error creating your account.";
pub const ACCOUNT_LOGIN_FAILED_MESSAGE: &str =
    "Your account was created, but you could not be logged in.  Please log in again.";

#[cfg(test)]
mod tests;
