//! Cluster REST API handlers
//!
//! Read-only views of the controller's cluster state. An unreachable
//! controller yields empty results rather than an error.

use crate::{ApiError, ClusterStatusResponse, MonitoringResponse, RequestHelper};

use std::panic::Location;

use axum::{Json, response::Response};
use error_location::ErrorLocation;

/// GET /api/v1/cluster/status
pub async fn cluster_status(request: RequestHelper) -> Response {
    let nodes = request.0.get_status_info().await;
    request.respond(Json(ClusterStatusResponse { nodes }))
}

/// GET /api/v1/cluster/database
pub async fn database_info(request: RequestHelper) -> Response {
    let info = request.0.get_database_info().await;
    request.respond(Json(info))
}

/// GET /api/v1/cluster/services
pub async fn service_info(request: RequestHelper) -> Response {
    let info = request.0.get_service_info().await;
    request.respond(Json(info))
}

/// GET /api/v1/cluster/monitoring
pub async fn monitoring_url(mut request: RequestHelper) -> Response {
    let outcome = match request.0.get_monitoring_url().await {
        Some(url) => Ok(Json(MonitoringResponse { url })),
        None => Err(ApiError::NotFound {
            message: "Head node is unknown".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    };
    request.respond(outcome)
}
