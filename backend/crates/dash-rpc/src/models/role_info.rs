use serde::{Deserialize, Serialize};

/// A node and the jobs (roles) it runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleInfo {
    pub public_ip: String,
    #[serde(default)]
    pub private_ip: String,
    #[serde(default)]
    pub jobs: Vec<String>,
}

impl RoleInfo {
    pub fn has_role(&self, role: &str) -> bool {
        self.jobs.iter().any(|job| job == role)
    }
}
