use crate::{RpcResult, RpcTransport};

use async_trait::async_trait;
use serde_json::json;

/// User directory: account records, capabilities, login tokens.
///
/// Records come back as semi-structured text; see [`crate::records`].
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// `:`-delimited capability list of `identity`.
    async fn get_capabilities(&self, identity: &str) -> RpcResult<String>;

    /// Replace the capability list; answers `"true"` on success.
    async fn set_capabilities(&self, identity: &str, capabilities: &str) -> RpcResult<String>;

    async fn get_app_data(&self, app_name: &str) -> RpcResult<String>;

    async fn get_user_data(&self, identity: &str) -> RpcResult<String>;

    async fn commit_new_user(
        &self,
        identity: &str,
        encrypted_password: &str,
        account_type: &str,
    ) -> RpcResult<String>;

    /// Record `token` as the latest login token of `identity`.
    async fn commit_new_token(
        &self,
        token: &str,
        identity: &str,
        expiration: &str,
    ) -> RpcResult<String>;

    /// Latest token recorded for `identity`.
    async fn get_token(&self, identity: &str) -> RpcResult<String>;

    /// `:`-delimited list of every account.
    async fn get_all_users(&self) -> RpcResult<String>;
}

pub struct HttpDirectoryClient {
    transport: RpcTransport,
}

impl HttpDirectoryClient {
    pub fn new(transport: RpcTransport) -> Self {
        Self { transport }
    }

    pub fn base_url(&self) -> &str {
        &self.transport.base_url
    }
}

#[async_trait]
impl DirectoryService for HttpDirectoryClient {
    async fn get_capabilities(&self, identity: &str) -> RpcResult<String> {
        self.transport
            .call("get_capabilities", json!({ "user": identity }))
            .await
    }

    async fn set_capabilities(&self, identity: &str, capabilities: &str) -> RpcResult<String> {
        self.transport
            .call(
                "set_capabilities",
                json!({ "user": identity, "capabilities": capabilities }),
            )
            .await
    }

    async fn get_app_data(&self, app_name: &str) -> RpcResult<String> {
        self.transport
            .call("get_app_data", json!({ "appname": app_name }))
            .await
    }

    async fn get_user_data(&self, identity: &str) -> RpcResult<String> {
        self.transport
            .call("get_user_data", json!({ "user": identity }))
            .await
    }

    async fn commit_new_user(
        &self,
        identity: &str,
        encrypted_password: &str,
        account_type: &str,
    ) -> RpcResult<String> {
        self.transport
            .call(
                "commit_new_user",
                json!({
                    "user": identity,
                    "passwd": encrypted_password,
                    "utype": account_type,
                }),
            )
            .await
    }

    async fn commit_new_token(
        &self,
        token: &str,
        identity: &str,
        expiration: &str,
    ) -> RpcResult<String> {
        self.transport
            .call(
                "commit_new_token",
                json!({ "token": token, "user": identity, "expiration": expiration }),
            )
            .await
    }

    async fn get_token(&self, identity: &str) -> RpcResult<String> {
        self.transport
            .call("get_token", json!({ "user": identity }))
            .await
    }

    async fn get_all_users(&self) -> RpcResult<String> {
        self.transport.call("get_all_users", json!({})).await
    }
}
