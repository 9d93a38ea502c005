use crate::helper::log_remote_failure;
use crate::{DashboardHelper, HEAD_NODE_ROLE, LOGIN_ROLE};

use dash_rpc::{NodeStatus, RoleInfo};

use std::collections::BTreeMap;

use log::debug;

impl DashboardHelper {
    /// Stats of every node; empty when the controller cannot be reached.
    pub async fn get_status_info(&self) -> Vec<NodeStatus> {
        match self.controller().get_stats().await {
            Ok(nodes) => nodes,
            Err(e) => {
                log_remote_failure("get_status_info", &e);
                Vec::new()
            }
        }
    }

    /// Node roles, fetched at most once per request.
    pub async fn get_role_info(&mut self) -> Vec<RoleInfo> {
        if let Some(roles) = self.cache.role_info() {
            return roles.to_vec();
        }

        match self.controller().get_role_info().await {
            Ok(roles) => {
                self.cache.store_role_info(roles.clone());
                roles
            }
            Err(e) => {
                log_remote_failure("get_role_info", &e);
                Vec::new()
            }
        }
    }

    /// Public address of the first node running `role`.
    pub async fn get_host_with_role(&mut self, role: &str) -> Option<String> {
        let host = self
            .get_role_info()
            .await
            .into_iter()
            .find(|node| node.has_role(role))
            .map(|node| node.public_ip);

        if host.is_none() {
            debug!("No node runs role {role}");
        }
        host
    }

    pub async fn get_head_node_ip(&mut self) -> Option<String> {
        self.get_host_with_role(HEAD_NODE_ROLE).await
    }

    pub async fn get_login_host(&mut self) -> Option<String> {
        self.get_host_with_role(LOGIN_ROLE).await
    }

    pub async fn get_monitoring_url(&mut self) -> Option<String> {
        let head = self.get_head_node_ip().await?;
        Some(format!("http://{}:{}", head, self.backends.settings.monitor_port))
    }

    /// Hosted applications mapped to their URL, or `None` while loading.
    ///
    /// The head node's report covers the whole cluster, so only the first
    /// node is consulted.
    pub async fn get_application_info(&mut self) -> BTreeMap<String, Option<String>> {
        let status = self.get_status_info().await;
        let Some(head) = status.first() else {
            return BTreeMap::new();
        };

        let mut info = BTreeMap::new();
        let mut login_host: Option<String> = None;

        for (app, running) in head.applications() {
            let url = if running {
                if login_host.is_none() {
                    login_host = self.get_login_host().await;
                }
                match (login_host.as_deref(), self.get_app_port(app).await) {
                    (Some(host), Ok(port)) => Some(format!("http://{host}:{port}")),
                    _ => None,
                }
            } else {
                None
            };
            info.insert(app.to_string(), url);
        }

        info
    }

    pub async fn get_database_info(&self) -> BTreeMap<String, String> {
        match self.controller().get_database_information().await {
            Ok(info) => info,
            Err(e) => {
                log_remote_failure("get_database_info", &e);
                BTreeMap::new()
            }
        }
    }

    /// API services and their status.
    pub async fn get_service_info(&self) -> BTreeMap<String, String> {
        match self.controller().get_api_status().await {
            Ok(info) => info,
            Err(e) => {
                log_remote_failure("get_service_info", &e);
                BTreeMap::new()
            }
        }
    }
}
