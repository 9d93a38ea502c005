pub mod controller;
pub mod directory;
pub mod error;
pub mod models;
pub mod records;
pub mod transport;

pub use controller::{ControllerService, HttpControllerClient};
pub use directory::{DirectoryService, HttpDirectoryClient};
pub use error::{Result as RpcResult, RpcError};
pub use models::{node_status::NodeStatus, role_info::RoleInfo};
pub use records::{
    app_record::AppRecord,
    delimited::{is_placeholder_user, split_delimited},
    user_record::UserRecord,
};
pub use transport::RpcTransport;

/// Answer both services give when a mutating call succeeded.
pub const SUCCESS: &str = "true";

/// Separates capabilities, users and applications in directory text.
pub const LIST_DELIMITER: char = ':';
