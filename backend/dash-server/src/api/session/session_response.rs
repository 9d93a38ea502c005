use dash_auth::SessionState;

use serde::Serialize;

/// What the dashboard knows about the caller's session
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub state: SessionState,
    pub email: Option<String>,
    pub is_cloud_admin: bool,
    pub can_upload: bool,
    /// Applications the user administers
    pub apps: Vec<String>,
}
