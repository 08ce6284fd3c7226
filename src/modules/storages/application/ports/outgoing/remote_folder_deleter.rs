use async_trait::async_trait;

use crate::modules::storages::application::domain::entities::ProjectStorage;

/// Normalised result of a remote folder removal.
///
/// Remote failures are data, not errors: callers log them and carry on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteFolderOutcome {
    Deleted,
    AlreadyAbsent,
    Failed(String),
}

#[async_trait]
pub trait RemoteFolderDeleter: Send + Sync {
    async fn delete_remote_folder(&self, project_storage: &ProjectStorage) -> RemoteFolderOutcome;
}
