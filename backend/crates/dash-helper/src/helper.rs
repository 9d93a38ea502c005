use crate::{Backends, RequestCache};

use dash_auth::{CookieUpdate, Identity, SessionState};
use dash_rpc::{ControllerService, DirectoryService, RpcError};

use log::error;

/// Per-request view of the cluster for the dashboard.
///
/// Created when a request arrives and dropped when its response is sent. The
/// cache and the queued cookie updates never outlive the request.
pub struct DashboardHelper {
    pub(crate) backends: Backends,
    pub(crate) current_user: Option<Identity>,
    pub(crate) session: SessionState,
    pub(crate) cache: RequestCache,
    pub(crate) cookie_updates: Vec<CookieUpdate>,
}

impl DashboardHelper {
    /// Helper for an anonymous request. See [`Self::authenticate_session`].
    pub fn new(backends: Backends) -> Self {
        Self {
            backends,
            current_user: None,
            session: SessionState::LoggedOut,
            cache: RequestCache::new(),
            cookie_updates: Vec::new(),
        }
    }

    pub fn current_user(&self) -> Option<&Identity> {
        self.current_user.as_ref()
    }

    pub fn session_state(&self) -> SessionState {
        self.session
    }

    pub fn cookie_name(&self) -> &str {
        &self.backends.settings.cookie_name
    }

    /// Drain the cookie changes queued while handling this request.
    pub fn take_cookie_updates(&mut self) -> Vec<CookieUpdate> {
        std::mem::take(&mut self.cookie_updates)
    }

    pub(crate) fn controller(&self) -> &dyn ControllerService {
        self.backends.controller.as_ref()
    }

    pub(crate) fn directory(&self) -> &dyn DirectoryService {
        self.backends.directory.as_ref()
    }
}

pub(crate) fn log_remote_failure(operation: &str, err: &RpcError) {
    error!("{operation} caught remote failure: {err}");
}

impl std::fmt::Debug for DashboardHelper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DashboardHelper")
            .field("current_user", &self.current_user)
            .field("session", &self.session)
            .field("pending_cookies", &self.cookie_updates.len())
            .finish()
    }
}
