pub mod config;
pub mod nextcloud;
pub mod one_drive;
pub mod one_drive_admin_token;
pub mod registry;

use reqwest::{Client, StatusCode};

use crate::modules::storages::application::ports::outgoing::RemoteFolderOutcome;

use config::StorageInteractionConfig;

/// HTTP client for storage providers. Every request is bounded by the configured timeouts.
pub fn build_http_client(config: &StorageInteractionConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(config.request_timeout)
        .connect_timeout(config.connect_timeout)
        .build()
}

/// Status mapping shared by all providers for a folder DELETE.
pub(crate) fn normalize_delete_status(status: StatusCode) -> RemoteFolderOutcome {
    if status.is_success() {
        RemoteFolderOutcome::Deleted
    } else if status == StatusCode::NOT_FOUND {
        RemoteFolderOutcome::AlreadyAbsent
    } else {
        RemoteFolderOutcome::Failed(format!("unexpected status {}", status.as_u16()))
    }
}

pub(crate) fn transport_failure(err: &reqwest::Error) -> RemoteFolderOutcome {
    if err.is_timeout() {
        RemoteFolderOutcome::Failed("request timed out".to_string())
    } else if err.is_connect() {
        RemoteFolderOutcome::Failed(format!("connection failed: {err}"))
    } else {
        RemoteFolderOutcome::Failed(format!("request failed: {err}"))
    }
}
