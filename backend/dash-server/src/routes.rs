use crate::{AppState, api, health};

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post, put},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
pub fn build_router(state: AppState) -> Router {
    let max_upload_bytes = state.max_upload_bytes;

    Router::new()
        // Health check endpoints
        .route("/health", get(health::health_check))
        .route("/live", get(health::liveness_check))
        .route("/ready", get(health::readiness_check))
        // Session
        .route(
            "/api/v1/session",
            get(api::session::session::current_session)
                .post(api::session::session::login)
                .delete(api::session::session::logout),
        )
        .route(
            "/api/v1/session/refresh",
            post(api::session::session::refresh_session),
        )
        // Users and permissions
        .route("/api/v1/users", post(api::users::users::create_user))
        .route(
            "/api/v1/users/permissions",
            get(api::users::users::list_permissions),
        )
        .route(
            "/api/v1/users/{email}/permissions/{permission}",
            put(api::users::users::grant_permission)
                .delete(api::users::users::revoke_permission),
        )
        // Cluster
        .route(
            "/api/v1/cluster/status",
            get(api::cluster::cluster::cluster_status),
        )
        .route(
            "/api/v1/cluster/database",
            get(api::cluster::cluster::database_info),
        )
        .route(
            "/api/v1/cluster/services",
            get(api::cluster::cluster::service_info),
        )
        .route(
            "/api/v1/cluster/monitoring",
            get(api::cluster::cluster::monitoring_url),
        )
        // Applications
        .route(
            "/api/v1/apps",
            get(api::apps::apps::list_apps).post(api::apps::apps::upload_app),
        )
        .route("/api/v1/apps/{name}", axum::routing::delete(api::apps::apps::delete_app))
        // Add shared state
        .with_state(state)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
