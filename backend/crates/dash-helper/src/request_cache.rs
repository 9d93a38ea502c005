use dash_rpc::RoleInfo;

use std::collections::HashMap;

/// Lookups memoized for the lifetime of one request.
///
/// Only successful answers are stored; a failed call is retried by the next
/// lookup in the same request.
#[derive(Debug, Default)]
pub struct RequestCache {
    capabilities: HashMap<String, Vec<String>>,
    user_data: HashMap<String, String>,
    role_info: Option<Vec<RoleInfo>>,
}

impl RequestCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capabilities(&self, identity: &str) -> Option<&[String]> {
        self.capabilities.get(identity).map(Vec::as_slice)
    }

    pub fn store_capabilities(&mut self, identity: &str, capabilities: Vec<String>) {
        self.capabilities.insert(identity.to_string(), capabilities);
    }

    pub fn user_data(&self, identity: &str) -> Option<&str> {
        self.user_data.get(identity).map(String::as_str)
    }

    pub fn store_user_data(&mut self, identity: &str, record: String) {
        self.user_data.insert(identity.to_string(), record);
    }

    pub fn role_info(&self) -> Option<&[RoleInfo]> {
        self.role_info.as_deref()
    }

    pub fn store_role_info(&mut self, roles: Vec<RoleInfo>) {
        self.role_info = Some(roles);
    }
}
