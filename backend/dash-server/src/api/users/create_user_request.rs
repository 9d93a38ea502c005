use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,

    /// Must equal `password` when given
    #[serde(default)]
    pub password_confirmation: Option<String>,

    /// Directory account type; defaults to an XMPP-enabled user
    #[serde(default)]
    pub account_type: Option<String>,
}
