//! Axum extractor that opens the per-request dashboard helper

use crate::{ApiError, AppState, with_session_cookies};

use dash_auth::cookie_value;
use dash_helper::DashboardHelper;

use std::future::Future;

use axum::{
    extract::FromRequestParts,
    http::{header::COOKIE, request::Parts},
    response::{IntoResponse, Response},
};

/// Dashboard helper for the current request.
///
/// When the request carries a session cookie it is validated (digest and
/// latest token) and, if accepted, the helper acts as that user. An
/// unusable cookie leaves the request anonymous; it never rejects it.
pub struct RequestHelper(pub DashboardHelper);

impl FromRequestParts<AppState> for RequestHelper {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let mut helper = DashboardHelper::new(state.backends.clone());

            let presented = parts
                .headers
                .get_all(COOKIE)
                .iter()
                .filter_map(|header| header.to_str().ok())
                .find_map(|header| cookie_value(header, helper.cookie_name()))
                .map(str::to_string);

            if let Some(value) = presented
                && !helper.authenticate_session(&value).await
            {
                log::debug!("Session cookie not accepted; continuing anonymously");
            }

            Ok(RequestHelper(helper))
        }
    }
}

impl RequestHelper {
    /// Finish the request with `outcome`, success or error, plus every
    /// cookie change queued while serving it.
    pub fn respond<R: IntoResponse>(mut self, outcome: R) -> Response {
        with_session_cookies(&mut self.0, outcome)
    }

    /// Email of the logged-in user, or 401.
    #[track_caller]
    pub fn require_user(&self) -> Result<String, ApiError> {
        self.0
            .get_user_email()
            .map(str::to_string)
            .ok_or_else(|| ApiError::unauthorized("You must be logged in"))
    }

    /// 401 when anonymous, 403 when not a cloud administrator.
    pub async fn require_cloud_admin(&mut self) -> Result<String, ApiError> {
        let email = self.require_user()?;
        if !self.0.is_user_cloud_admin().await {
            return Err(ApiError::forbidden("Cloud administrator access required"));
        }
        Ok(email)
    }
}
