use crate::ApiError;

use dash_auth::{AuthError, SessionEvent, SessionState};
use dash_helper::HelperError;
use dash_rpc::RpcError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn test_unauthorized_returns_401_with_json_body() {
    let response = ApiError::unauthorized("You must be logged in").into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = json_body(response).await;
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    assert_eq!(json["error"]["message"], "You must be logged in");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_forbidden_returns_403() {
    let response = ApiError::forbidden("Cloud administrator access required").into_response();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    assert_eq!(json_body(response).await["error"]["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let response = ApiError::validation("Passwords do not match", "password_confirmation")
        .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = json_body(response).await;
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "password_confirmation");
}

#[tokio::test]
async fn test_operation_error_returns_422_with_message_verbatim() {
    let error = ApiError::Operation {
        message: "Application is already deployed".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = json_body(response).await;
    assert_eq!(json["error"]["code"], "OPERATION_FAILED");
    assert_eq!(json["error"]["message"], "Application is already deployed");
}

#[tokio::test]
async fn test_upstream_error_returns_502() {
    let response = ApiError::upstream("directory down").into_response();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    assert_eq!(json_body(response).await["error"]["code"], "UPSTREAM_ERROR");
}

#[tokio::test]
async fn test_internal_error_returns_500() {
    let error = ApiError::Internal {
        message: "boom".into(),
        location: ErrorLocation::from(Location::caller()),
    };
    let response = error.into_response();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json_body(response).await["error"]["code"], "INTERNAL_ERROR");
}

#[test]
fn test_remote_helper_error_converts_to_upstream_without_transport_detail() {
    let helper_error = HelperError::remote(
        "get_user_data",
        RpcError::fault("get_user_data", "secret internal detail"),
    );

    let api_error: ApiError = helper_error.into();

    match api_error {
        ApiError::Upstream { message, .. } => {
            assert_eq!(message, "get_user_data could not reach the cluster");
        }
        other => panic!("Expected Upstream, got {other:?}"),
    }
}

#[test]
fn test_validation_helper_error_keeps_field() {
    let helper_error = HelperError::validation("Email is invalid", Some("email"));

    let api_error: ApiError = helper_error.into();

    match api_error {
        ApiError::Validation { field, .. } => assert_eq!(field.as_deref(), Some("email")),
        other => panic!("Expected Validation, got {other:?}"),
    }
}

#[test]
fn test_not_found_and_domain_helper_errors_convert() {
    let not_found: ApiError = HelperError::not_found("app has no port").into();
    assert!(matches!(not_found, ApiError::NotFound { .. }));

    let domain: ApiError = HelperError::domain("Application is already deployed").into();
    match domain {
        ApiError::Operation { message, .. } => {
            assert_eq!(message, "Application is already deployed")
        }
        other => panic!("Expected Operation, got {other:?}"),
    }
}

#[test]
fn test_invalid_session_transition_converts_to_unauthorized() {
    let auth_error: AuthError = SessionState::LoggedOut
        .transition(SessionEvent::Revoked)
        .unwrap_err();

    let api_error: ApiError = HelperError::from(auth_error).into();

    assert!(matches!(api_error, ApiError::Unauthorized { .. }));
}

#[test]
fn test_other_auth_errors_convert_to_internal() {
    let auth_error = dash_auth::Identity::parse("no-at-sign").unwrap_err();

    let api_error: ApiError = HelperError::from(auth_error).into();

    assert!(matches!(api_error, ApiError::Internal { .. }));
}
