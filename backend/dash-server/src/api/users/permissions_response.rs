use dash_helper::UserPermissions;

use serde::Serialize;

/// Users and their permission flags
#[derive(Debug, Serialize)]
pub struct PermissionsResponse {
    pub permission_items: Vec<String>,
    pub users: Vec<UserPermissions>,
}
