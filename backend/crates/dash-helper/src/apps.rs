use crate::helper::log_remote_failure;
use crate::{
    APP_NOT_RUNNING_MESSAGE, APP_REMOVE_FAILED_MESSAGE, APP_REMOVED_MESSAGE, DashboardHelper,
    HelperError, HelperResult, UPLOAD_FAILED_MESSAGE, UPLOAD_LOGIN_REQUIRED_MESSAGE,
    UPLOAD_SUCCESS_MESSAGE,
};

use dash_rpc::{AppRecord, SUCCESS};

use std::io::Write;

use log::{error, info, warn};
use tempfile::NamedTempFile;

impl DashboardHelper {
    /// Port `app_name` is served on.
    pub async fn get_app_port(&self, app_name: &str) -> HelperResult<u16> {
        match self.directory().get_app_data(app_name).await {
            Ok(text) => AppRecord::parse(&text)
                .port
                .ok_or_else(|| HelperError::not_found("app has no port")),
            Err(e) => {
                log_remote_failure("get_app_port", &e);
                Err(HelperError::not_found("app has no port"))
            }
        }
    }

    /// An app exists once the directory has assigned it a non-zero port.
    pub async fn does_app_exist(&self, app_name: &str) -> bool {
        match self.directory().get_app_data(app_name).await {
            Ok(text) => AppRecord::parse(&text).is_hosted(),
            Err(e) => {
                log_remote_failure("does_app_exist", &e);
                false
            }
        }
    }

    /// Stage `archive` in a temporary file and ask the controller to deploy it.
    ///
    /// The controller answers an accepted upload with a fault or an error
    /// status as often as with `"true"`; both count as success.
    pub async fn upload_app(&mut self, archive: &[u8]) -> HelperResult<String> {
        let Some(user) = self.current_user.clone() else {
            return Err(HelperError::domain(UPLOAD_LOGIN_REQUIRED_MESSAGE));
        };

        let staged = stage_archive(archive).map_err(|e| {
            error!("upload_app could not stage archive: {e}");
            HelperError::domain(UPLOAD_FAILED_MESSAGE)
        })?;
        let tgz_path = staged.path().to_string_lossy().into_owned();

        info!("Uploading {} bytes for {}", archive.len(), user);

        // `staged` is kept until the controller has answered
        let answer = self.controller().upload_tgz(&tgz_path, user.as_str()).await;
        drop(staged);

        match answer {
            Ok(text) if text == SUCCESS => Ok(UPLOAD_SUCCESS_MESSAGE.to_string()),
            Ok(text) => {
                warn!("upload_tgz answered: {text}");
                Err(HelperError::domain(text))
            }
            Err(e) if e.is_remote_answer() => {
                info!("upload_tgz signalled acceptance: {e}");
                Ok(UPLOAD_SUCCESS_MESSAGE.to_string())
            }
            Err(e) => {
                log_remote_failure("upload_app", &e);
                Err(HelperError::domain(UPLOAD_FAILED_MESSAGE))
            }
        }
    }

    /// Stop hosting `app_name`; returns a message for the user.
    pub async fn delete_app(&self, app_name: &str) -> String {
        if !self.does_app_exist(app_name).await {
            return APP_NOT_RUNNING_MESSAGE.to_string();
        }

        match self.controller().stop_app(app_name).await {
            Ok(text) if text == SUCCESS => APP_REMOVED_MESSAGE.to_string(),
            Ok(text) => {
                error!("stop_app answered: {text}");
                APP_REMOVE_FAILED_MESSAGE.to_string()
            }
            Err(e) => {
                log_remote_failure("delete_app", &e);
                APP_REMOVE_FAILED_MESSAGE.to_string()
            }
        }
    }
}

fn stage_archive(archive: &[u8]) -> std::io::Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix("dash-upload-")
        .suffix(".tar.gz")
        .tempfile()?;
    file.write_all(archive)?;
    file.flush()?;
    Ok(file)
}
