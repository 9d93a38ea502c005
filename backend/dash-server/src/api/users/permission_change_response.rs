use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct PermissionChangeResponse {
    pub email: String,
    pub permission: String,
    pub granted: bool,
}
