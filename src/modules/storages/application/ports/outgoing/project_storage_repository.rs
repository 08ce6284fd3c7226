use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::storages::application::domain::entities::ProjectStorage;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectStorageRepositoryError {
    #[error("Project storage not found")]
    NotFound,

    /// The stored storage row cannot be decoded into a provider configuration.
    #[error("Invalid storage configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ProjectStorageRepository: Send + Sync {
    /// Loads the link together with its project and decoded storage.
    async fn find_by_id(
        &self,
        project_storage_id: Uuid,
    ) -> Result<ProjectStorage, ProjectStorageRepositoryError>;

    /// Removes the work package file links of the link's project on the link's
    /// storage, then the link itself, in one transaction.
    ///
    /// Returns the number of file links removed.
    async fn delete_with_file_links(
        &self,
        project_storage: &ProjectStorage,
    ) -> Result<u64, ProjectStorageRepositoryError>;
}
