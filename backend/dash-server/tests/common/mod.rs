#![allow(dead_code)]

//! Test infrastructure for dash-server API tests

use dash_auth::{
    DEFAULT_COOKIE_NAME, INVALID_TOKEN, Identity, SharedSecret, build_credential,
    encrypt_password,
};
use dash_helper::{Backends, HelperSettings};
use dash_rpc::{ControllerService, DirectoryService, NodeStatus, RoleInfo, RpcError, RpcResult};
use dash_server::{AppState, build_router};

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{Router, body::Body, http::Request, response::Response};
use http::HeaderMap;
use http_body_util::BodyExt;
use tower::ServiceExt;

pub const ALICE: &str = "alice@example.com";
pub const ALICE_PASSWORD: &str = "correct horse";
pub const BOB: &str = "bob@example.com";
pub const BOB_PASSWORD: &str = "battery staple";
pub const HEAD_IP: &str = "10.0.0.1";
pub const LOGIN_IP: &str = "10.0.0.2";
pub const TEST_SECRET: &str = "test-secret";
pub const MAX_UPLOAD_BYTES: usize = 1024;

/// Controller double answering from in-memory cluster state
pub struct FakeController {
    pub stats: Vec<NodeStatus>,
    pub roles: Vec<RoleInfo>,
    pub upload_answer: String,
    pub unreachable: bool,
    pub uploads: Mutex<Vec<String>>,
    pub stopped: Mutex<Vec<String>>,
}

impl FakeController {
    pub fn new() -> Self {
        Self {
            stats: vec![NodeStatus {
                public_ip: HEAD_IP.to_string(),
                apps: BTreeMap::from([
                    ("guestbook".to_string(), true),
                    ("blog".to_string(), false),
                ]),
                extra: BTreeMap::new(),
            }],
            roles: vec![
                RoleInfo {
                    public_ip: HEAD_IP.to_string(),
                    private_ip: String::new(),
                    jobs: vec!["shadow".to_string(), "database".to_string()],
                },
                RoleInfo {
                    public_ip: LOGIN_IP.to_string(),
                    private_ip: String::new(),
                    jobs: vec!["login".to_string(), "appengine".to_string()],
                },
            ],
            upload_answer: "true".to_string(),
            unreachable: false,
            uploads: Mutex::new(Vec::new()),
            stopped: Mutex::new(Vec::new()),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::new()
        }
    }

    fn check(&self, method: &str) -> RpcResult<()> {
        if self.unreachable {
            return Err(RpcError::fault(method, "connection refused"));
        }
        Ok(())
    }
}

#[async_trait]
impl ControllerService for FakeController {
    async fn get_uaserver_host(&self, _is_public: bool) -> RpcResult<String> {
        self.check("get_uaserver_host")?;
        Ok(HEAD_IP.to_string())
    }

    async fn get_stats(&self) -> RpcResult<Vec<NodeStatus>> {
        self.check("get_stats")?;
        Ok(self.stats.clone())
    }

    async fn get_role_info(&self) -> RpcResult<Vec<RoleInfo>> {
        self.check("get_role_info")?;
        Ok(self.roles.clone())
    }

    async fn get_database_information(&self) -> RpcResult<BTreeMap<String, String>> {
        self.check("get_database_information")?;
        Ok(BTreeMap::from([(
            "table".to_string(),
            "cassandra".to_string(),
        )]))
    }

    async fn get_api_status(&self) -> RpcResult<BTreeMap<String, String>> {
        self.check("get_api_status")?;
        Ok(BTreeMap::from([(
            "blobstore".to_string(),
            "running".to_string(),
        )]))
    }

    async fn upload_tgz(&self, _tgz_path: &str, email: &str) -> RpcResult<String> {
        self.check("upload_tgz")?;
        self.uploads.lock().unwrap().push(email.to_string());
        Ok(self.upload_answer.clone())
    }

    async fn stop_app(&self, app_name: &str) -> RpcResult<String> {
        self.check("stop_app")?;
        self.stopped.lock().unwrap().push(app_name.to_string());
        Ok("true".to_string())
    }
}

/// Directory double; alice administers guestbook and may upload, bob may not.
pub struct FakeDirectory {
    pub users: Mutex<HashMap<String, String>>,
    pub capabilities: Mutex<HashMap<String, String>>,
    pub tokens: Mutex<HashMap<String, String>>,
    pub apps: HashMap<String, String>,
    pub commit_token_answer: String,
    pub unreachable: bool,
    pub committed_users: Mutex<Vec<String>>,
}

impl FakeDirectory {
    pub fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::from([
                (
                    ALICE.to_string(),
                    user_record(ALICE, ALICE_PASSWORD, &["guestbook"], true),
                ),
                (
                    BOB.to_string(),
                    user_record(BOB, BOB_PASSWORD, &[], false),
                ),
            ])),
            capabilities: Mutex::new(HashMap::from([
                (ALICE.to_string(), "upload_app".to_string()),
                (BOB.to_string(), String::new()),
            ])),
            tokens: Mutex::new(HashMap::new()),
            apps: HashMap::from([(
                "guestbook".to_string(),
                "name:guestbook\n ports: 8080\n".to_string(),
            )]),
            commit_token_answer: "true".to_string(),
            unreachable: false,
            committed_users: Mutex::new(Vec::new()),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::new()
        }
    }

    pub fn latest_token(&self, identity: &str) -> Option<String> {
        self.tokens.lock().unwrap().get(identity).cloned()
    }

    pub fn capabilities_of(&self, identity: &str) -> String {
        self.capabilities
            .lock()
            .unwrap()
            .get(identity)
            .cloned()
            .unwrap_or_default()
    }

    fn check(&self, method: &str) -> RpcResult<()> {
        if self.unreachable {
            return Err(RpcError::fault(method, "connection refused"));
        }
        Ok(())
    }
}

#[async_trait]
impl DirectoryService for FakeDirectory {
    async fn get_capabilities(&self, identity: &str) -> RpcResult<String> {
        self.check("get_capabilities")?;
        Ok(self.capabilities_of(identity))
    }

    async fn set_capabilities(&self, identity: &str, capabilities: &str) -> RpcResult<String> {
        self.check("set_capabilities")?;
        self.capabilities
            .lock()
            .unwrap()
            .insert(identity.to_string(), capabilities.to_string());
        Ok("true".to_string())
    }

    async fn get_app_data(&self, app_name: &str) -> RpcResult<String> {
        self.check("get_app_data")?;
        Ok(self
            .apps
            .get(app_name)
            .cloned()
            .unwrap_or_else(|| "Error: app does not exist".to_string()))
    }

    async fn get_user_data(&self, identity: &str) -> RpcResult<String> {
        self.check("get_user_data")?;
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
        _account_type: &str,
    ) -> RpcResult<String> {
        self.check("commit_new_user")?;
        if self.users.lock().unwrap().contains_key(identity) {
            return Ok("Error: user already exists".to_string());
        }
        self.users.lock().unwrap().insert(
            identity.to_string(),
            format!("email:{identity}\npassword:{encrypted_password}\napplications:\n"),
        );
        self.committed_users.lock().unwrap().push(identity.to_string());
        Ok("true".to_string())
    }

    async fn commit_new_token(
        &self,
        token: &str,
        identity: &str,
        _expiration: &str,
    ) -> RpcResult<String> {
        self.check("commit_new_token")?;
        if self.commit_token_answer == "true" {
            self.tokens
                .lock()
                .unwrap()
                .insert(identity.to_string(), token.to_string());
        }
        Ok(self.commit_token_answer.clone())
    }

    async fn get_token(&self, identity: &str) -> RpcResult<String> {
        self.check("get_token")?;
        Ok(self.latest_token(identity).unwrap_or_default())
    }

    async fn get_all_users(&self) -> RpcResult<String> {
        self.check("get_all_users")?;
        Ok(format!("____:{ALICE}:{BOB}:alice@{HEAD_IP}:"))
    }
}

pub fn user_record(identity: &str, password: &str, apps: &[&str], admin: bool) -> String {
    format!(
        "email:{identity}\npassword:{}\napplications:{}\nis_cloud_admin:{admin}\n",
        encrypt_password(identity, password),
        apps.join(":")
    )
}

/// Both fakes behind one handle so tests can inspect them after a request
pub struct TestCluster {
    pub controller: Arc<FakeController>,
    pub directory: Arc<FakeDirectory>,
}

impl TestCluster {
    pub fn new() -> Self {
        Self::with(FakeController::new(), FakeDirectory::new())
    }

    pub fn with(controller: FakeController, directory: FakeDirectory) -> Self {
        Self {
            controller: Arc::new(controller),
            directory: Arc::new(directory),
        }
    }

    /// Create AppState for testing
    pub fn app_state(&self) -> AppState {
        let backends = Backends::new(
            self.controller.clone(),
            self.directory.clone(),
            SharedSecret::new(TEST_SECRET),
            HelperSettings::default(),
        );
        AppState::new(backends, MAX_UPLOAD_BYTES)
    }

    pub fn router(&self) -> Router {
        build_router(self.app_state())
    }

    /// `Cookie` header of a session for `email` that has since logged out.
    pub fn revoked_session_cookie(&self, email: &str, apps: &[&str]) -> String {
        let cookie = self.session_cookie(email, apps);
        self.directory
            .tokens
            .lock()
            .unwrap()
            .insert(email.to_string(), INVALID_TOKEN.to_string());
        cookie
    }

    /// `Cookie` header of a live session for `email` with the given apps.
    pub fn session_cookie(&self, email: &str, apps: &[&str]) -> String {
        self.directory
            .tokens
            .lock()
            .unwrap()
            .insert(email.to_string(), email.to_string());

        let identity = Identity::parse(email).unwrap();
        let apps: Vec<String> = apps.iter().map(|app| app.to_string()).collect();
        let value =
            build_credential(&identity, &apps, &SharedSecret::new(TEST_SECRET)).unwrap();
        format!("{DEFAULT_COOKIE_NAME}={value}")
    }
}

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn json_body(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// True when the response tells the browser to drop the session cookie
pub fn removes_session_cookie(headers: &HeaderMap) -> bool {
    set_cookies(headers).iter().any(|cookie| {
        cookie.starts_with(&format!("{DEFAULT_COOKIE_NAME}=;")) && cookie.contains("Max-Age=0")
    })
}

/// All `Set-Cookie` header values of a response
pub fn set_cookies(headers: &HeaderMap) -> Vec<String> {
    headers
        .get_all(http::header::SET_COOKIE)
        .iter()
        .map(|value| value.to_str().unwrap().to_string())
        .collect()
}

pub fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}
