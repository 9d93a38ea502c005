use crate::error::Result as ServerErrorResult;

use dash_auth::SharedSecret;
use dash_config::Config;
use dash_helper::{Backends, HelperSettings};
use dash_rpc::{ControllerService, HttpControllerClient, HttpDirectoryClient, RpcTransport};

use std::sync::Arc;
use std::time::Duration;

use log::info;

/// Shared state handed to every handler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub backends: Backends,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(backends: Backends, max_upload_bytes: usize) -> Self {
        Self {
            backends,
            max_upload_bytes,
        }
    }

    /// Build the RPC clients described by `config`.
    ///
    /// Without a configured directory host the controller is asked where the
    /// directory runs, so the controller must be reachable at startup.
    pub async fn connect(config: &Config) -> ServerErrorResult<Self> {
        let secret = SharedSecret::new(config.shared_secret()?);

        let controller = HttpControllerClient::new(RpcTransport::new(
            &config.controller.base_url(),
            secret.clone(),
            Duration::from_secs(config.controller.request_timeout_secs),
        )?);
        info!("Controller client ready: {}", controller.base_url());

        let directory_host = match config.directory.host {
            Some(ref host) => host.clone(),
            None => {
                info!("Asking the controller where the directory runs");
                controller.get_uaserver_host(false).await?
            }
        };
        let directory = HttpDirectoryClient::new(RpcTransport::new(
            &config.directory.base_url(&directory_host),
            secret.clone(),
            Duration::from_secs(config.directory.request_timeout_secs),
        )?);
        info!("Directory client ready: {}", directory.base_url());

        let backends = Backends::new(
            Arc::new(controller),
            Arc::new(directory),
            secret,
            HelperSettings {
                cookie_name: config.auth.cookie_name.clone(),
                monitor_port: config.controller.monitor_port,
            },
        );

        Ok(Self::new(backends, config.server.max_upload_bytes))
    }
}
