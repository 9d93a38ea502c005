use std::collections::BTreeMap;

use serde::Serialize;

/// Hosted applications; `url` is absent while an app is still loading
#[derive(Debug, Serialize)]
pub struct AppListResponse {
    pub apps: BTreeMap<String, Option<String>>,
}
