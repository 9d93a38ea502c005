pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    apps::{
        app_list_response::AppListResponse,
        apps::{delete_app, list_apps, upload_app},
    },
    cluster::{
        cluster::{cluster_status, database_info, monitoring_url, service_info},
        cluster_status_response::ClusterStatusResponse,
        monitoring_response::MonitoringResponse,
    },
    cookies::with_session_cookies,
    error::ApiError,
    error::Result as ApiResult,
    extractors::request_helper::RequestHelper,
    message_response::MessageResponse,
    session::{
        login_request::LoginRequest,
        session::{current_session, login, logout, refresh_session},
        session_response::SessionResponse,
    },
    users::{
        create_user_request::CreateUserRequest,
        permission_change_response::PermissionChangeResponse,
        permissions_response::PermissionsResponse,
        users::{create_user, grant_permission, list_permissions, revoke_permission},
    },
};
pub use app_state::AppState;
pub use routes::build_router;

/// Shortest password accepted for new accounts.
pub const MIN_PASSWORD_LENGTH: usize = 6;
