
use crate::{Backends, DashboardHelper, HelperSettings};

use dash_auth::{SharedSecret, encrypt_password};
use dash_rpc::{
    ControllerService, DirectoryService, NodeStatus, RoleInfo, RpcError, RpcResult,
};

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

pub(crate) const ALICE: &str = "alice@example.com";
pub(crate) const ALICE_PASSWORD: &str = "correct horse";
pub(crate) const BOB: &str = "bob@example.com";
pub(crate) const HEAD_IP: &str = "10.0.0.1";
pub(crate) const LOGIN_IP: &str = "10.0.0.2";

/// How the fake controller answers an upload.
#[derive(Debug, Clone)]
pub(crate) enum UploadOutcome {
    Answer(String),
    Fault,
    Missing,
}

pub(crate) struct FakeController {
    pub stats: Vec<NodeStatus>,
    pub roles: Vec<RoleInfo>,
    pub database: BTreeMap<String, String>,
    pub services: BTreeMap<String, String>,
    pub upload: UploadOutcome,
    pub stop_answer: String,
    pub unreachable: bool,
    pub calls: Mutex<Vec<String>>,
    pub uploaded_paths: Mutex<Vec<(String, String, bool)>>,
}

impl FakeController {
    pub fn new() -> Self {
        Self {
            stats: Vec::new(),
            roles: vec![
                role(HEAD_IP, &["shadow", "database"]),
                role(LOGIN_IP, &["login", "appengine"]),
            ],
            database: BTreeMap::from([("table".to_string(), "cassandra".to_string())]),
            services: BTreeMap::from([("blobstore".to_string(), "running".to_string())]),
            upload: UploadOutcome::Answer("true".to_string()),
            stop_answer: "true".to_string(),
            unreachable: false,
            calls: Mutex::new(Vec::new()),
            uploaded_paths: Mutex::new(Vec::new()),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::new()
        }
    }

    pub fn call_count(&self, method: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|name| *name == method)
            .count()
    }

    fn record(&self, method: &str) -> RpcResult<()> {
        self.calls.lock().unwrap().push(method.to_string());
        if self.unreachable {
            return Err(RpcError::fault(method, "connection refused"));
        }
        Ok(())
    }
}

#[async_trait]
impl ControllerService for FakeController {
    async fn get_uaserver_host(&self, _is_public: bool) -> RpcResult<String> {
        self.record("get_uaserver_host")?;
        Ok(HEAD_IP.to_string())
    }

    async fn get_stats(&self) -> RpcResult<Vec<NodeStatus>> {
        self.record("get_stats")?;
        Ok(self.stats.clone())
    }

    async fn get_role_info(&self) -> RpcResult<Vec<RoleInfo>> {
        self.record("get_role_info")?;
        Ok(self.roles.clone())
    }

    async fn get_database_information(&self) -> RpcResult<BTreeMap<String, String>> {
        self.record("get_database_information")?;
        Ok(self.database.clone())
    }

    async fn get_api_status(&self) -> RpcResult<BTreeMap<String, String>> {
        self.record("get_api_status")?;
        Ok(self.services.clone())
    }

    async fn upload_tgz(&self, tgz_path: &str, email: &str) -> RpcResult<String> {
        self.record("upload_tgz")?;
        let staged = std::path::Path::new(tgz_path).exists();
        self.uploaded_paths.lock().unwrap().push((
            tgz_path.to_string(),
            email.to_string(),
            staged,
        ));
        match &self.upload {
            UploadOutcome::Answer(text) => Ok(text.clone()),
            UploadOutcome::Fault => Err(RpcError::fault("upload_tgz", "app is starting")),
            UploadOutcome::Missing => Err(RpcError::MissingResult {
                method: "upload_tgz".to_string(),
                location: error_location::ErrorLocation::from(std::panic::Location::caller()),
            }),
        }
    }

    async fn stop_app(&self, _app_name: &str) -> RpcResult<String> {
        self.record("stop_app")?;
        Ok(self.stop_answer.clone())
    }
}

pub(crate) struct FakeDirectory {
    pub users: Mutex<HashMap<String, String>>,
    pub capabilities: Mutex<HashMap<String, String>>,
    pub apps: HashMap<String, String>,
    pub tokens: Mutex<HashMap<String, String>>,
    pub all_users: String,
    pub commit_user_answer: String,
    pub commit_token_answer: String,
    pub set_capabilities_answer: String,
    pub unreachable: bool,
    pub calls: Mutex<Vec<String>>,
    pub committed_users: Mutex<Vec<(String, String, String)>>,
}

impl FakeDirectory {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::from([(
                ALICE.to_string(),
                user_record(ALICE, ALICE_PASSWORD, &["guestbook", "blog"], true),
            )])),
            capabilities: Mutex::new(HashMap::from([
                (ALICE.to_string(), "upload_app".to_string()),
                (BOB.to_string(), String::new()),
            ])),
            apps: HashMap::from([
                ("guestbook".to_string(), "name:guestbook\n ports: 8080\n".to_string()),
                ("blog".to_string(), "name:blog\n ports: 0\n".to_string()),
            ]),
            tokens: Mutex::new(HashMap::new()),
            all_users: format!("____:{ALICE}:{BOB}:alice@{HEAD_IP}:"),
            commit_user_answer: "true".to_string(),
            commit_token_answer: "true".to_string(),
            set_capabilities_answer: "true".to_string(),
            unreachable: false,
            calls: Mutex::new(Vec::new()),
            committed_users: Mutex::new(Vec::new()),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::new()
        }
    }

    pub fn call_count(&self, method: &str) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|name| *name == method)
            .count()
    }

    pub fn latest_token(&self, identity: &str) -> Option<String> {
        self.tokens.lock().unwrap().get(identity).cloned()
    }

    fn record(&self, method: &str) -> RpcResult<()> {
        self.calls.lock().unwrap().push(method.to_string());
        if self.unreachable {
            return Err(RpcError::fault(method, "connection refused"));
        }
        Ok(())
    }
}

#[async_trait]
impl DirectoryService for FakeDirectory {
    async fn get_capabilities(&self, identity: &str) -> RpcResult<String> {
        self.record("get_capabilities")?;
        Ok(self
            .capabilities
            .lock()
            .unwrap()
            .get(identity)
            .cloned()
            .unwrap_or_default())
    }

    async fn set_capabilities(&self, identity: &str, capabilities: &str) -> RpcResult<String> {
        self.record("set_capabilities")?;
        if self.set_capabilities_answer == "true" {
            self.capabilities
                .lock()
                .unwrap()
                .insert(identity.to_string(), capabilities.to_string());
        }
        Ok(self.set_capabilities_answer.clone())
    }

    async fn get_app_data(&self, app_name: &str) -> RpcResult<String> {
        self.record("get_app_data")?;
        Ok(self
            .apps
            .get(app_name)
            .cloned()
            .unwrap_or_else(|| "Error: app does not exist".to_string()))
    }

    async fn get_user_data(&self, identity: &str) -> RpcResult<String> {
        self.record("get_user_data")?;
        Ok(self
            .users
            .lock()
            .unwrap()
            .get(identity)
            .cloned()
            .unwrap_or_else(|| "Error: user does not exist".to_string()))
    }

    async fn commit_new_user(
        &self,
        identity: &str,
        encrypted_password: &str,
        account_type: &str,
    ) -> RpcResult<String> {
        self.record("commit_new_user")?;
        self.committed_users.lock().unwrap().push((
            identity.to_string(),
            encrypted_password.to_string(),
            account_type.to_string(),
        ));
        Ok(self.commit_user_answer.clone())
    }

    async fn commit_new_token(
        &self,
        token: &str,
        identity: &str,
        _expiration: &str,
    ) -> RpcResult<String> {
        self.record("commit_new_token")?;
        if self.commit_token_answer == "true" {
            self.tokens
                .lock()
                .unwrap()
                .insert(identity.to_string(), token.to_string());
        }
        Ok(self.commit_token_answer.clone())
    }

    async fn get_token(&self, identity: &str) -> RpcResult<String> {
        self.record("get_token")?;
        Ok(self.latest_token(identity).unwrap_or_default())
    }

    async fn get_all_users(&self) -> RpcResult<String> {
        self.record("get_all_users")?;
        Ok(self.all_users.clone())
    }
}

pub(crate) fn role(ip: &str, jobs: &[&str]) -> RoleInfo {
    RoleInfo {
        public_ip: ip.to_string(),
        private_ip: String::new(),
        jobs: jobs.iter().map(|job| job.to_string()).collect(),
    }
}

pub(crate) fn node(apps: &[(&str, bool)]) -> NodeStatus {
    NodeStatus {
        public_ip: HEAD_IP.to_string(),
        apps: apps
            .iter()
            .map(|(name, running)| (name.to_string(), *running))
            .collect(),
        extra: BTreeMap::new(),
    }
}

pub(crate) fn user_record(identity: &str, password: &str, apps: &[&str], admin: bool) -> String {
    format!(
        "email:{identity}\npassword:{}\napplications:{}\nis_cloud_admin:{admin}\n",
        encrypt_password(identity, password),
        apps.join(":")
    )
}

pub(crate) fn secret() -> SharedSecret {
    SharedSecret::new("S")
}

pub(crate) fn helper_with(
    controller: &Arc<FakeController>,
    directory: &Arc<FakeDirectory>,
) -> DashboardHelper {
    let backends = Backends::new(
        controller.clone(),
        directory.clone(),
        secret(),
        HelperSettings::default(),
    );
    DashboardHelper::new(backends)
}

/// Helper whose request already carries alice's session.
pub(crate) async fn logged_in_helper(
    controller: &Arc<FakeController>,
    directory: &Arc<FakeDirectory>,
) -> DashboardHelper {
    let mut helper = helper_with(controller, directory);
    assert!(helper.login_user(ALICE, ALICE_PASSWORD).await);
    helper.take_cookie_updates();
    helper
}
