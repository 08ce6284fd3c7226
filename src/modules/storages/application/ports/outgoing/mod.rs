pub mod project_permission_query;
pub mod project_storage_events;
pub mod project_storage_repository;
pub mod remote_folder_deleter;

pub use project_permission_query::{
    ProjectPermission, ProjectPermissionQuery, ProjectPermissionQueryError,
};
pub use project_storage_events::ProjectStorageEventPublisher;
pub use project_storage_repository::{ProjectStorageRepository, ProjectStorageRepositoryError};
pub use remote_folder_deleter::{RemoteFolderDeleter, RemoteFolderOutcome};
