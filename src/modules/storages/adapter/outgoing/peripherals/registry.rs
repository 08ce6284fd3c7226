use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use crate::modules::storages::application::domain::entities::{ProjectStorage, StorageProvider};
use crate::modules::storages::application::ports::outgoing::{
    RemoteFolderDeleter, RemoteFolderOutcome,
};

use super::config::StorageInteractionConfig;
use super::nextcloud::NextcloudFolderDeleter;
use super::one_drive::OneDriveFolderDeleter;
use super::one_drive_admin_token::{AdminTokenSource, ClientCredentialsTokenSource};

/// Picks the provider adapter matching a storage's configuration.
#[derive(Clone)]
pub struct StorageInteractionRegistry {
    nextcloud: NextcloudFolderDeleter,
    one_drive: OneDriveFolderDeleter,
}

impl StorageInteractionRegistry {
    pub fn new(http: Client, config: &StorageInteractionConfig) -> Self {
        let tokens = Arc::new(ClientCredentialsTokenSource::new(
            http.clone(),
            config.login_base_url.clone(),
        ));

        Self::with_token_source(http, config.graph_base_url.clone(), tokens)
    }

    pub fn with_token_source(
        http: Client,
        graph_base_url: impl Into<String>,
        tokens: Arc<dyn AdminTokenSource + Send + Sync>,
    ) -> Self {
        Self {
            nextcloud: NextcloudFolderDeleter::new(http.clone()),
            one_drive: OneDriveFolderDeleter::new(http, graph_base_url, tokens),
        }
    }
}

#[async_trait]
impl RemoteFolderDeleter for StorageInteractionRegistry {
    async fn delete_remote_folder(&self, project_storage: &ProjectStorage) -> RemoteFolderOutcome {
        let Some(location) = project_storage.project_folder_location() else {
            return RemoteFolderOutcome::Failed("project folder location is unknown".to_string());
        };

        match &project_storage.storage.provider {
            StorageProvider::Nextcloud(nextcloud) => {
                self.nextcloud.delete_folder(nextcloud, &location).await
            }
            StorageProvider::OneDrive(one_drive) => {
                self.one_drive.delete_folder(one_drive, &location).await
            }
        }
    }
}
