use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::storages::application::ports::outgoing::{
    ProjectPermissionQueryError, ProjectStorageRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteProjectStorageError {
    #[error("Project storage not found")]
    ProjectStorageNotFound,

    #[error("Not allowed to manage storages in this project")]
    Forbidden,

    #[error("Invalid storage configuration: {0}")]
    InvalidStorageConfiguration(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl From<ProjectStorageRepositoryError> for DeleteProjectStorageError {
    fn from(err: ProjectStorageRepositoryError) -> Self {
        match err {
            ProjectStorageRepositoryError::NotFound => {
                DeleteProjectStorageError::ProjectStorageNotFound
            }
            ProjectStorageRepositoryError::InvalidConfiguration(msg) => {
                DeleteProjectStorageError::InvalidStorageConfiguration(msg)
            }
            ProjectStorageRepositoryError::DatabaseError(msg) => {
                DeleteProjectStorageError::RepositoryError(msg)
            }
        }
    }
}

impl From<ProjectPermissionQueryError> for DeleteProjectStorageError {
    fn from(err: ProjectPermissionQueryError) -> Self {
        match err {
            ProjectPermissionQueryError::DatabaseError(msg) => {
                DeleteProjectStorageError::RepositoryError(msg)
            }
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Output
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletedProjectStorage {
    pub project_storage_id: Uuid,
    pub project_id: Uuid,
    pub storage_id: Uuid,
    pub deleted_file_links: u64,
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait DeleteProjectStorageUseCase: Send + Sync {
    async fn execute(
        &self,
        actor: UserId,
        project_storage_id: Uuid,
    ) -> Result<DeletedProjectStorage, DeleteProjectStorageError>;
}
