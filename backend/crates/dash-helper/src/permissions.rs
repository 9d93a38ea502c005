use crate::helper::log_remote_failure;
use crate::DashboardHelper;

use dash_rpc::{LIST_DELIMITER, SUCCESS, is_placeholder_user, split_delimited};

use std::collections::BTreeMap;

use log::{error, info};
use serde::Serialize;

/// Permissions an administrator can grant or revoke.
pub const PERMISSION_ITEMS: &[&str] = &["upload_app"];

/// One row of the user permission table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserPermissions {
    pub email: String,
    /// One entry per permission item
    #[serde(flatten)]
    pub permissions: BTreeMap<String, bool>,
}

impl DashboardHelper {
    pub fn get_all_permission_items() -> Vec<String> {
        PERMISSION_ITEMS.iter().map(|item| item.to_string()).collect()
    }

    pub fn is_permission_item(perm: &str) -> bool {
        PERMISSION_ITEMS.contains(&perm)
    }

    /// Every account with a flag per permission item.
    ///
    /// Padding entries and the XMPP accounts bound to the head node are skipped.
    pub async fn list_all_users_permissions(&mut self) -> Vec<UserPermissions> {
        let users = match self.directory().get_all_users().await {
            Ok(text) => split_delimited(&text),
            Err(e) => {
                log_remote_failure("list_all_users_permissions", &e);
                return Vec::new();
            }
        };

        let xmpp_suffix = self
            .get_head_node_ip()
            .await
            .map(|ip| format!("@{ip}"));

        let mut rows = Vec::new();
        for user in users {
            if is_placeholder_user(&user) {
                continue;
            }
            if xmpp_suffix
                .as_deref()
                .is_some_and(|suffix| user.ends_with(suffix))
            {
                continue;
            }

            let capabilities = self.get_user_capabilities(&user).await;
            let permissions = PERMISSION_ITEMS
                .iter()
                .map(|item| (item.to_string(), capabilities.iter().any(|cap| cap == item)))
                .collect();

            rows.push(UserPermissions {
                email: user,
                permissions,
            });
        }

        rows
    }

    /// Grant `perm`; granting a held permission succeeds without a call.
    pub async fn add_user_permissions(&mut self, identity: &str, perm: &str) -> bool {
        let Ok(mut capabilities) = self.fetch_capabilities(identity).await else {
            return false;
        };
        if capabilities.iter().any(|cap| cap == perm) {
            return true;
        }

        capabilities.push(perm.to_string());
        self.store_capabilities(identity, capabilities).await
    }

    /// Revoke `perm`; revoking a permission not held succeeds without a call.
    pub async fn remove_user_permissions(&mut self, identity: &str, perm: &str) -> bool {
        let Ok(capabilities) = self.fetch_capabilities(identity).await else {
            return false;
        };
        if !capabilities.iter().any(|cap| cap == perm) {
            return true;
        }

        let remaining = capabilities.into_iter().filter(|cap| cap != perm).collect();
        self.store_capabilities(identity, remaining).await
    }

    async fn store_capabilities(&mut self, identity: &str, capabilities: Vec<String>) -> bool {
        let delimiter = LIST_DELIMITER.to_string();
        let joined = capabilities.join(delimiter.as_str());

        match self.directory().set_capabilities(identity, &joined).await {
            Ok(answer) if answer == SUCCESS => {
                info!("Capabilities of {identity} set to [{joined}]");
                self.cache.store_capabilities(identity, capabilities);
                true
            }
            Ok(answer) => {
                error!("set_capabilities for {identity} answered: {answer}");
                false
            }
            Err(e) => {
                log_remote_failure("set_capabilities", &e);
                false
            }
        }
    }
}
