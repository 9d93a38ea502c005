pub mod create_user_request;
pub mod permission_change_response;
pub mod permissions_response;
#[allow(clippy::module_inception)]
pub mod users;
