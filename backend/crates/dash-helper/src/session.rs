use crate::helper::log_remote_failure;
use crate::{DashboardHelper, HelperResult};

use dash_auth::{
    CookieUpdate, INVALID_TOKEN, Identity, SessionCookie, SessionCredential, SessionEvent,
    TOKEN_EXPIRATION, password_matches,
};
use dash_rpc::{SUCCESS, UserRecord};

use chrono::Utc;
use log::{debug, error, info, warn};

impl DashboardHelper {
    /// Check `password` against the directory and, on a match, log the user in.
    ///
    /// Any failure yields `false` and queues no cookie. That includes a
    /// directory that does not record the login token, since a cookie
    /// without a matching token is rejected on the next request.
    pub async fn login_user(&mut self, email: &str, password: &str) -> bool {
        let identity = match Identity::parse(email) {
            Ok(identity) => identity,
            Err(e) => {
                warn!("Failed login: {e}");
                return false;
            }
        };

        let Ok(record) = self.fetch_user_data(identity.as_str()).await else {
            warn!("Failed login: {identity} user record unavailable");
            return false;
        };
        let Some(stored_hash) = UserRecord::parse(&record).password_hash else {
            warn!("Failed login: {identity} has no stored password");
            return false;
        };
        if !password_matches(
            identity.as_str(),
            password,
            &stored_hash.to_ascii_lowercase(),
        ) {
            warn!("Failed login: {identity} password mismatch");
            return false;
        }

        if !self.create_token(identity.as_str(), identity.as_str()).await {
            warn!("Failed login: {identity} token was not recorded");
            return false;
        }
        if let Err(e) = self.set_session_cookie(&identity).await {
            error!("Failed login: {identity} credential could not be built: {e}");
            return false;
        }

        self.session = match self.session.transition(SessionEvent::LoginSucceeded) {
            Ok(state) => state,
            Err(e) => {
                error!("Failed login: {e}");
                return false;
            }
        };
        info!("{identity} logged in");
        self.current_user = Some(identity);
        true
    }

    /// Revoke the current user's session.
    ///
    /// Commits the sentinel token as the user's latest token and removes the
    /// cookie. Credentials issued before remain digest-valid; only validators
    /// that consult the latest token reject them.
    pub async fn logout_user(&mut self) -> HelperResult<bool> {
        let Some(identity) = self.current_user.take() else {
            return Ok(true);
        };

        let committed = self.create_token(INVALID_TOKEN, identity.as_str()).await;
        self.remove_session_cookie();
        self.session = self.session.transition(SessionEvent::Revoked)?;

        info!("{identity} logged out");
        Ok(committed)
    }

    /// Record `token` as the latest login token of `identity`.
    pub async fn create_token(&self, token: &str, identity: &str) -> bool {
        match self
            .directory()
            .commit_new_token(token, identity, TOKEN_EXPIRATION)
            .await
        {
            Ok(answer) if answer == SUCCESS => true,
            Ok(answer) => {
                warn!("commit_new_token for {identity} answered: {answer}");
                false
            }
            Err(e) => {
                log_remote_failure("create_token", &e);
                false
            }
        }
    }

    /// Queue a fresh login cookie for `identity`, sealed over its current app list.
    pub async fn set_session_cookie(&mut self, identity: &Identity) -> HelperResult<()> {
        let record = self.query_user_data(identity.as_str()).await;
        let applications = UserRecord::parse(&record).applications;

        let credential = SessionCredential::build(identity, &applications, &self.backends.secret)?;
        let cookie = SessionCookie::issue(self.cookie_name(), &credential, Utc::now());

        self.cookie_updates.push(CookieUpdate::Set(cookie));
        Ok(())
    }

    pub fn remove_session_cookie(&mut self) {
        let name = self.cookie_name().to_string();
        self.cookie_updates.push(CookieUpdate::Remove { name });
    }

    /// Rebuild the current user's cookie, picking up application changes.
    pub async fn reissue_session_cookie(&mut self) -> HelperResult<()> {
        self.session = self.session.transition(SessionEvent::CredentialReissued)?;
        if let Some(identity) = self.current_user.clone() {
            self.set_session_cookie(&identity).await?;
        }
        Ok(())
    }

    /// Accept a presented cookie value as the current user's session.
    ///
    /// The credential must carry a valid digest and its identity's latest
    /// token must still be the identity itself (not the revoke sentinel). A
    /// rejected cookie is queued for removal.
    pub async fn authenticate_session(&mut self, cookie_value: &str) -> bool {
        let credential = match SessionCredential::decode(cookie_value)
            .and_then(|credential| credential.verify(&self.backends.secret).map(|()| credential))
        {
            Ok(credential) => credential,
            Err(e) => {
                warn!("Rejected session cookie: {e}");
                self.remove_session_cookie();
                return false;
            }
        };

        let identity = credential.identity().clone();
        let fresh = match self.directory().get_token(identity.as_str()).await {
            Ok(token) => token == identity.as_str(),
            Err(e) => {
                log_remote_failure("authenticate_session", &e);
                return false;
            }
        };
        if !fresh {
            debug!("Session of {identity} was revoked");
            self.remove_session_cookie();
            return false;
        }

        match self.session.transition(SessionEvent::LoginSucceeded) {
            Ok(state) => self.session = state,
            Err(e) => {
                error!("Rejected session of {identity}: {e}");
                return false;
            }
        }
        self.current_user = Some(identity);
        true
    }
}
