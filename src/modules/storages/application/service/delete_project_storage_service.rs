use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::storages::application::domain::entities::ProjectStorage;
use crate::modules::storages::application::domain::events::ProjectStorageEvent;
use crate::modules::storages::application::ports::incoming::use_cases::{
    DeleteProjectStorageError, DeleteProjectStorageUseCase, DeletedProjectStorage,
};
use crate::modules::storages::application::ports::outgoing::{
    ProjectPermission, ProjectPermissionQuery, ProjectStorageEventPublisher,
    ProjectStorageRepository, RemoteFolderDeleter, RemoteFolderOutcome,
};

// ============================================================================
// Delete Project Storage Service (Orchestration Layer)
// ============================================================================

/// Removes a project storage link and reconciles the remote project folder.
///
/// The remote folder is removed on a best-effort basis before the local
/// transaction; its outcome never decides whether the local deletion happens.
#[derive(Clone)]
pub struct DeleteProjectStorageService {
    repository: Arc<dyn ProjectStorageRepository + Send + Sync>,
    permissions: Arc<dyn ProjectPermissionQuery + Send + Sync>,
    remote_folders: Arc<dyn RemoteFolderDeleter + Send + Sync>,
    events: Arc<dyn ProjectStorageEventPublisher + Send + Sync>,
}

impl DeleteProjectStorageService {
    pub fn new(
        repository: Arc<dyn ProjectStorageRepository + Send + Sync>,
        permissions: Arc<dyn ProjectPermissionQuery + Send + Sync>,
        remote_folders: Arc<dyn RemoteFolderDeleter + Send + Sync>,
        events: Arc<dyn ProjectStorageEventPublisher + Send + Sync>,
    ) -> Self {
        Self {
            repository,
            permissions,
            remote_folders,
            events,
        }
    }

    async fn reconcile_remote_folder(&self, project_storage: &ProjectStorage) {
        if !project_storage.requires_remote_folder_deletion() {
            tracing::debug!(
                project_storage_id = %project_storage.id,
                mode = %project_storage.project_folder_mode,
                "Remote project folder is not managed, skipping remote deletion"
            );
            return;
        }

        match self
            .remote_folders
            .delete_remote_folder(project_storage)
            .await
        {
            RemoteFolderOutcome::Deleted => tracing::info!(
                project_storage_id = %project_storage.id,
                storage_id = %project_storage.storage.id,
                "Remote project folder deleted"
            ),
            RemoteFolderOutcome::AlreadyAbsent => tracing::info!(
                project_storage_id = %project_storage.id,
                storage_id = %project_storage.storage.id,
                "Remote project folder was already absent"
            ),
            RemoteFolderOutcome::Failed(reason) => tracing::warn!(
                project_storage_id = %project_storage.id,
                storage_id = %project_storage.storage.id,
                provider = project_storage.storage.provider.provider_type(),
                "Remote project folder deletion failed, continuing with local cleanup: {}",
                reason
            ),
        }
    }
}

#[async_trait]
impl DeleteProjectStorageUseCase for DeleteProjectStorageService {
    async fn execute(
        &self,
        actor: UserId,
        project_storage_id: Uuid,
    ) -> Result<DeletedProjectStorage, DeleteProjectStorageError> {
        // Step 1: Preconditions, nothing is mutated before these pass
        let project_storage = self.repository.find_by_id(project_storage_id).await?;

        let allowed = self
            .permissions
            .is_allowed(
                actor,
                project_storage.project.id,
                ProjectPermission::ManageStoragesInProject,
            )
            .await?;

        if !allowed {
            tracing::warn!(
                user_id = %actor,
                project_id = %project_storage.project.id,
                "Project storage deletion denied"
            );
            return Err(DeleteProjectStorageError::Forbidden);
        }

        // Step 2: Remote folder, best effort
        self.reconcile_remote_folder(&project_storage).await;

        // Step 3: File links and the link itself, one transaction
        let deleted_file_links = self
            .repository
            .delete_with_file_links(&project_storage)
            .await
            .map_err(|e| {
                tracing::error!(
                    project_storage_id = %project_storage.id,
                    "Local project storage deletion failed: {}",
                    e
                );
                DeleteProjectStorageError::from(e)
            })?;

        // Step 4: Only committed deletions are announced
        self.events.publish(ProjectStorageEvent::destroyed(
            project_storage.id,
            project_storage.project.id,
            project_storage.storage.id,
        ));

        tracing::info!(
            project_storage_id = %project_storage.id,
            project_id = %project_storage.project.id,
            deleted_file_links,
            "Project storage deleted"
        );

        Ok(DeletedProjectStorage {
            project_storage_id: project_storage.id,
            project_id: project_storage.project.id,
            storage_id: project_storage.storage.id,
            deleted_file_links,
        })
    }
}
