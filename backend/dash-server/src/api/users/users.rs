//! User and permission REST API handlers

use crate::api::session::session::session_summary;
use crate::{
    ApiError, ApiResult, CreateUserRequest, MIN_PASSWORD_LENGTH, PermissionChangeResponse,
    PermissionsResponse, RequestHelper, SessionResponse,
};

use dash_helper::{DEFAULT_ACCOUNT_TYPE, DashboardHelper};

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, rejection::JsonRejection},
    http::StatusCode,
    response::Response,
};
use error_location::ErrorLocation;

/// POST /api/v1/users
///
/// Create an account and log it in
pub async fn create_user(
    mut request: RequestHelper,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Response {
    let outcome = match payload {
        Ok(Json(req)) => sign_up(&mut request.0, req).await,
        Err(rejection) => return request.respond(rejection),
    };
    request.respond(outcome)
}

async fn sign_up(
    helper: &mut DashboardHelper,
    req: CreateUserRequest,
) -> ApiResult<(StatusCode, Json<SessionResponse>)> {
    if req.password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ApiError::validation(
            format!("Password must be at least {MIN_PASSWORD_LENGTH} characters long"),
            "password",
        ));
    }
    if let Some(ref confirmation) = req.password_confirmation
        && confirmation != &req.password
    {
        return Err(ApiError::validation(
            "Passwords do not match",
            "password_confirmation",
        ));
    }

    let account_type = req.account_type.as_deref().unwrap_or(DEFAULT_ACCOUNT_TYPE);
    helper
        .create_new_user(req.email.trim(), &req.password, account_type)
        .await?;

    Ok((StatusCode::CREATED, Json(session_summary(helper).await)))
}

/// GET /api/v1/users/permissions
///
/// Permission table (cloud administrators only)
pub async fn list_permissions(mut request: RequestHelper) -> Response {
    let outcome = permission_table(&mut request).await;
    request.respond(outcome)
}

async fn permission_table(
    request: &mut RequestHelper,
) -> ApiResult<Json<PermissionsResponse>> {
    request.require_cloud_admin().await?;

    let users = request.0.list_all_users_permissions().await;
    Ok(Json(PermissionsResponse {
        permission_items: DashboardHelper::get_all_permission_items(),
        users,
    }))
}

/// PUT /api/v1/users/{email}/permissions/{permission}
pub async fn grant_permission(
    mut request: RequestHelper,
    Path((email, permission)): Path<(String, String)>,
) -> Response {
    let outcome = change_permission(&mut request, email, permission, true).await;
    request.respond(outcome)
}

/// DELETE /api/v1/users/{email}/permissions/{permission}
pub async fn revoke_permission(
    mut request: RequestHelper,
    Path((email, permission)): Path<(String, String)>,
) -> Response {
    let outcome = change_permission(&mut request, email, permission, false).await;
    request.respond(outcome)
}

async fn change_permission(
    request: &mut RequestHelper,
    email: String,
    permission: String,
    grant: bool,
) -> ApiResult<Json<PermissionChangeResponse>> {
    request.require_cloud_admin().await?;
    if !DashboardHelper::is_permission_item(&permission) {
        return Err(ApiError::NotFound {
            message: format!("Permission {permission} does not exist"),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let helper = &mut request.0;
    let changed = if grant {
        helper.add_user_permissions(&email, &permission).await
    } else {
        helper.remove_user_permissions(&email, &permission).await
    };
    if !changed {
        return Err(ApiError::upstream(format!(
            "Could not update permissions of {email}"
        )));
    }

    Ok(Json(PermissionChangeResponse {
        email,
        permission,
        granted: grant,
    }))
}
