use dash_helper::DashboardHelper;

use axum::http::{HeaderValue, header::SET_COOKIE};
use axum::response::{IntoResponse, Response};
use log::error;

/// Attach the cookie changes queued on `helper` as `Set-Cookie` headers.
pub fn with_session_cookies<R: IntoResponse>(helper: &mut DashboardHelper, body: R) -> Response {
    let mut response = body.into_response();

    for update in helper.take_cookie_updates() {
        match HeaderValue::from_str(&update.to_header_value()) {
            Ok(value) => {
                response.headers_mut().append(SET_COOKIE, value);
            }
            Err(e) => error!("Dropping unrepresentable Set-Cookie header: {e}"),
        }
    }

    response
}
