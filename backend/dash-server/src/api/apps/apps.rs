//! Application REST API handlers

use crate::{ApiError, ApiResult, AppListResponse, MessageResponse, RequestHelper};

use axum::{
    Json,
    extract::{Path, rejection::BytesRejection},
    http::StatusCode,
    response::Response,
};
use bytes::Bytes;

/// GET /api/v1/apps
pub async fn list_apps(mut request: RequestHelper) -> Response {
    let apps = request.0.get_application_info().await;
    request.respond(Json(AppListResponse { apps }))
}

/// POST /api/v1/apps
///
/// Deploy an application; the body is the gzipped tar archive
pub async fn upload_app(
    mut request: RequestHelper,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let outcome = match body {
        Ok(archive) => upload(&mut request, archive).await,
        // Oversized bodies still answer with the queued cookie changes
        Err(rejection) => return request.respond(rejection),
    };
    request.respond(outcome)
}

async fn upload(
    request: &mut RequestHelper,
    archive: Bytes,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    request.require_user()?;
    if !request.0.can_upload().await {
        return Err(ApiError::forbidden(
            "You do not have permission to upload applications",
        ));
    }
    if archive.is_empty() {
        return Err(ApiError::validation("Archive is empty", "body"));
    }

    let message = request.0.upload_app(&archive).await?;
    Ok((StatusCode::ACCEPTED, Json(MessageResponse::new(message))))
}

/// DELETE /api/v1/apps/{name}
///
/// Stop hosting an application the caller administers
pub async fn delete_app(mut request: RequestHelper, Path(name): Path<String>) -> Response {
    let outcome = remove(&mut request, name).await;
    request.respond(outcome)
}

async fn remove(
    request: &mut RequestHelper,
    name: String,
) -> ApiResult<Json<MessageResponse>> {
    request.require_user()?;

    let helper = &mut request.0;
    let owns_app = helper.get_user_app_list().await.contains(&name);
    if !owns_app && !helper.is_user_cloud_admin().await {
        return Err(ApiError::forbidden(format!(
            "You are not an administrator of {name}"
        )));
    }

    let message = helper.delete_app(&name).await;
    Ok(Json(MessageResponse::new(message)))
}
