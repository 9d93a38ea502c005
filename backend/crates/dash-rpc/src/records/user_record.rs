use crate::split_delimited;

use std::sync::LazyLock;

use regex::Regex;

static APPLICATIONS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\napplications:(.*)\n").expect("applications regex is valid")
});
static PASSWORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"password:([0-9a-fA-F]+)").expect("password regex is valid"));
static CLOUD_ADMIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"is_cloud_admin:true").expect("cloud admin regex is valid"));

/// Fields the dashboard reads out of a user record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserRecord {
    /// Encrypted password as stored by the directory
    pub password_hash: Option<String>,
    /// Applications the user administers, in directory order
    pub applications: Vec<String>,
    pub is_cloud_admin: bool,
}

impl UserRecord {
    pub fn parse(text: &str) -> Self {
        let password_hash = PASSWORD
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string());

        let applications = APPLICATIONS
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| split_delimited(m.as_str()))
            .unwrap_or_default();

        Self {
            password_hash,
            applications,
            is_cloud_admin: CLOUD_ADMIN.is_match(text),
        }
    }
}
