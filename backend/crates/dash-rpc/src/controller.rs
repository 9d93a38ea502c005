use crate::{NodeStatus, RoleInfo, RpcResult, RpcTransport};

use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::json;

/// Cluster controller: application lifecycle and topology.
#[async_trait]
pub trait ControllerService: Send + Sync {
    /// Host of the user directory; `is_public` selects the public address.
    async fn get_uaserver_host(&self, is_public: bool) -> RpcResult<String>;

    async fn get_stats(&self) -> RpcResult<Vec<NodeStatus>>;

    async fn get_role_info(&self) -> RpcResult<Vec<RoleInfo>>;

    async fn get_database_information(&self) -> RpcResult<BTreeMap<String, String>>;

    async fn get_api_status(&self) -> RpcResult<BTreeMap<String, String>>;

    /// Deploy the archive at `tgz_path` on behalf of `email`.
    async fn upload_tgz(&self, tgz_path: &str, email: &str) -> RpcResult<String>;

    async fn stop_app(&self, app_name: &str) -> RpcResult<String>;
}

pub struct HttpControllerClient {
    transport: RpcTransport,
}

impl HttpControllerClient {
    pub fn new(transport: RpcTransport) -> Self {
        Self { transport }
    }

    pub fn base_url(&self) -> &str {
        &self.transport.base_url
    }
}

#[async_trait]
impl ControllerService for HttpControllerClient {
    async fn get_uaserver_host(&self, is_public: bool) -> RpcResult<String> {
        self.transport
            .call("get_uaserver_host", json!({ "is_public": is_public }))
            .await
    }

    async fn get_stats(&self) -> RpcResult<Vec<NodeStatus>> {
        self.transport.call("get_stats", json!({})).await
    }

    async fn get_role_info(&self) -> RpcResult<Vec<RoleInfo>> {
        self.transport.call("get_role_info", json!({})).await
    }

    async fn get_database_information(&self) -> RpcResult<BTreeMap<String, String>> {
        self.transport
            .call("get_database_information", json!({}))
            .await
    }

    async fn get_api_status(&self) -> RpcResult<BTreeMap<String, String>> {
        self.transport.call("get_api_status", json!({})).await
    }

    async fn upload_tgz(&self, tgz_path: &str, email: &str) -> RpcResult<String> {
        self.transport
            .call(
                "upload_tgz",
                json!({ "tgz_path": tgz_path, "email": email }),
            )
            .await
    }

    async fn stop_app(&self, app_name: &str) -> RpcResult<String> {
        self.transport
            .call("stop_app", json!({ "app_name": app_name }))
            .await
    }
}
