//! Session REST API handlers
//!
//! Login, logout and session inspection. Every response, error or not,
//! carries the cookie changes made while serving it.

use crate::{ApiError, ApiResult, LoginRequest, MessageResponse, RequestHelper, SessionResponse};

use dash_helper::DashboardHelper;

use axum::{Json, extract::rejection::JsonRejection, response::Response};

/// POST /api/v1/session
///
/// Log in with email and password
pub async fn login(
    mut request: RequestHelper,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Response {
    let outcome = match payload {
        Ok(Json(req)) => log_in(&mut request.0, req).await,
        Err(rejection) => return request.respond(rejection),
    };
    request.respond(outcome)
}

async fn log_in(
    helper: &mut DashboardHelper,
    req: LoginRequest,
) -> ApiResult<Json<SessionResponse>> {
    let email = req.email.trim();
    if email.is_empty() {
        return Err(ApiError::validation("Email is required", "email"));
    }

    if !helper.login_user(email, &req.password).await {
        return Err(ApiError::unauthorized("Incorrect email or password"));
    }

    Ok(Json(session_summary(helper).await))
}

/// DELETE /api/v1/session
///
/// Revoke the current session
pub async fn logout(mut request: RequestHelper) -> Response {
    let outcome = match request.0.logout_user().await {
        Ok(committed) => {
            if !committed {
                log::warn!("Logout could not record the revoked token");
            }
            Ok(Json(MessageResponse::new("Logged out")))
        }
        Err(e) => Err(ApiError::from(e)),
    };
    request.respond(outcome)
}

/// GET /api/v1/session
///
/// Describe the caller's session (anonymous callers get a logged-out summary)
pub async fn current_session(mut request: RequestHelper) -> Response {
    let summary = session_summary(&mut request.0).await;
    request.respond(Json(summary))
}

/// POST /api/v1/session/refresh
///
/// Re-issue the cookie so it reflects the user's current applications
pub async fn refresh_session(mut request: RequestHelper) -> Response {
    let outcome = match request.0.reissue_session_cookie().await {
        Ok(()) => Ok(Json(session_summary(&mut request.0).await)),
        Err(e) => Err(ApiError::from(e)),
    };
    request.respond(outcome)
}

pub(crate) async fn session_summary(helper: &mut DashboardHelper) -> SessionResponse {
    SessionResponse {
        state: helper.session_state(),
        email: helper.get_user_email().map(str::to_string),
        is_cloud_admin: helper.is_user_cloud_admin().await,
        can_upload: helper.can_upload().await,
        apps: helper.get_user_app_list().await,
    }
}
