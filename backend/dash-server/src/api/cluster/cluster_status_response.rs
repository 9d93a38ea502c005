use dash_rpc::NodeStatus;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ClusterStatusResponse {
    pub nodes: Vec<NodeStatus>,
}
