use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Application key the controller reports when a node hosts nothing.
pub const NO_APPS_PLACEHOLDER: &str = "none";

/// Stats the controller reports for one node.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NodeStatus {
    #[serde(default)]
    pub public_ip: String,
    /// Application name -> running (`false` while still loading)
    #[serde(default)]
    pub apps: BTreeMap<String, bool>,
    /// CPU, memory, disk and whatever else the controller sends
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl NodeStatus {
    /// Hosted applications, without the placeholder entry.
    pub fn applications(&self) -> impl Iterator<Item = (&str, bool)> {
        self.apps
            .iter()
            .filter(|(name, _)| name.as_str() != NO_APPS_PLACEHOLDER)
            .map(|(name, running)| (name.as_str(), *running))
    }
}
