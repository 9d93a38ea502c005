use crate::{SESSION_TTL_DAYS, SessionCredential};

use chrono::{DateTime, TimeDelta, Utc};

const COOKIE_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";
const EXPIRED_DATE: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// Login cookie attached to an outbound response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    pub name: String,
    pub value: String,
    pub expires: DateTime<Utc>,
}

impl SessionCookie {
    /// Cookie carrying `credential`, valid for one day from `issued_at`.
    pub fn issue(name: &str, credential: &SessionCredential, issued_at: DateTime<Utc>) -> Self {
        Self {
            name: name.to_string(),
            value: credential.encode(),
            expires: issued_at + TimeDelta::days(SESSION_TTL_DAYS),
        }
    }

    pub fn to_header_value(&self) -> String {
        format!(
            "{}={}; Expires={}; Path=/",
            self.name,
            self.value,
            self.expires.format(COOKIE_DATE_FORMAT)
        )
    }
}

/// Change to the client-side session artifact queued during a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CookieUpdate {
    Set(SessionCookie),
    Remove { name: String },
}

impl CookieUpdate {
    /// Render as a `Set-Cookie` header value.
    pub fn to_header_value(&self) -> String {
        match self {
            Self::Set(cookie) => cookie.to_header_value(),
            Self::Remove { name } => {
                format!("{name}=; Expires={EXPIRED_DATE}; Max-Age=0; Path=/")
            }
        }
    }
}

/// Find the value of cookie `name` in a `Cookie` request header.
pub fn cookie_value<'a>(cookie_header: &'a str, name: &str) -> Option<&'a str> {
    cookie_header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value)
}
