use crate::helper::log_remote_failure;
use crate::{
    ACCOUNT_FAILED_MESSAGE, ACCOUNT_LOGIN_FAILED_MESSAGE, DashboardHelper, HelperError,
    HelperResult, UPLOAD_CAPABILITY,
};

use dash_auth::{Identity, SessionEvent, encrypt_password};
use dash_rpc::{SUCCESS, UserRecord, split_delimited};

use log::{error, info};

impl DashboardHelper {
    /// Directory record of `identity`, or `""` when it cannot be fetched.
    pub async fn query_user_data(&mut self, identity: &str) -> String {
        self.fetch_user_data(identity).await.unwrap_or_default()
    }

    /// Capabilities of `identity`, or none when they cannot be fetched.
    pub async fn get_user_capabilities(&mut self, identity: &str) -> Vec<String> {
        self.fetch_capabilities(identity).await.unwrap_or_default()
    }

    /// Applications the current user administers, in directory order.
    pub async fn get_user_app_list(&mut self) -> Vec<String> {
        let Some(user) = self.current_user.clone() else {
            return Vec::new();
        };
        let record = self.query_user_data(user.as_str()).await;
        UserRecord::parse(&record).applications
    }

    pub fn is_user_logged_in(&self) -> bool {
        self.current_user.is_some()
    }

    pub fn get_user_email(&self) -> Option<&str> {
        self.current_user.as_ref().map(Identity::as_str)
    }

    pub async fn is_user_cloud_admin(&mut self) -> bool {
        let Some(user) = self.current_user.clone() else {
            return false;
        };
        let record = self.query_user_data(user.as_str()).await;
        UserRecord::parse(&record).is_cloud_admin
    }

    pub async fn can_upload(&mut self) -> bool {
        let Some(user) = self.current_user.clone() else {
            return false;
        };
        self.get_user_capabilities(user.as_str())
            .await
            .iter()
            .any(|cap| cap == UPLOAD_CAPABILITY)
    }

    /// Create `email`'s account and its XMPP twin `<nickname>@<login host>`,
    /// then log the new user in.
    pub async fn create_new_user(
        &mut self,
        email: &str,
        password: &str,
        account_type: &str,
    ) -> HelperResult<bool> {
        let identity = Identity::parse(email)
            .map_err(|e| HelperError::validation(e.to_string(), Some("email")))?;
        if password.is_empty() {
            return Err(HelperError::validation(
                "password cannot be empty",
                Some("password"),
            ));
        }

        self.commit_account(identity.as_str(), password, account_type)
            .await?;

        let Some(login_host) = self.get_login_host().await else {
            error!("create_new_user: no login host to bind the XMPP account to");
            return Err(HelperError::domain(ACCOUNT_FAILED_MESSAGE));
        };
        let xmpp_user = format!("{}@{}", identity.nickname(), login_host);
        self.commit_account(&xmpp_user, password, account_type).await?;

        info!("Created account {identity} (XMPP {xmpp_user})");

        if !self.create_token(identity.as_str(), identity.as_str()).await {
            error!("create_new_user: {identity} was created but its token was not recorded");
            return Err(HelperError::domain(ACCOUNT_LOGIN_FAILED_MESSAGE));
        }
        self.set_session_cookie(&identity).await?;
        self.session = self.session.transition(SessionEvent::LoginSucceeded)?;
        self.current_user = Some(identity);

        Ok(true)
    }

    async fn commit_account(
        &self,
        identity: &str,
        password: &str,
        account_type: &str,
    ) -> HelperResult<()> {
        let encrypted = encrypt_password(identity, password);
        match self
            .directory()
            .commit_new_user(identity, &encrypted, account_type)
            .await
        {
            Ok(answer) if answer == SUCCESS => Ok(()),
            Ok(answer) => {
                error!("commit_new_user for {identity} answered: {answer}");
                Err(HelperError::domain(answer))
            }
            Err(e) => {
                log_remote_failure("create_new_user", &e);
                Err(HelperError::domain(ACCOUNT_FAILED_MESSAGE))
            }
        }
    }

    pub(crate) async fn fetch_user_data(&mut self, identity: &str) -> HelperResult<String> {
        if let Some(record) = self.cache.user_data(identity) {
            return Ok(record.to_string());
        }

        match self.directory().get_user_data(identity).await {
            Ok(record) => {
                self.cache.store_user_data(identity, record.clone());
                Ok(record)
            }
            Err(e) => {
                log_remote_failure("query_user_data", &e);
                Err(HelperError::remote("query_user_data", e))
            }
        }
    }

    pub(crate) async fn fetch_capabilities(&mut self, identity: &str) -> HelperResult<Vec<String>> {
        if let Some(capabilities) = self.cache.capabilities(identity) {
            return Ok(capabilities.to_vec());
        }

        match self.directory().get_capabilities(identity).await {
            Ok(text) => {
                let capabilities = split_delimited(&text);
                self.cache.store_capabilities(identity, capabilities.clone());
                Ok(capabilities)
            }
            Err(e) => {
                log_remote_failure("get_user_capabilities", &e);
                Err(HelperError::remote("get_user_capabilities", e))
            }
        }
    }
}
