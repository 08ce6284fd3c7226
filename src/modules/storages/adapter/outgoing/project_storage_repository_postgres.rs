use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, ConnectionTrait, DatabaseBackend, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, QueryFilter, QueryResult, QuerySelect, QueryTrait, Statement, TransactionTrait,
};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::storages::adapter::outgoing::sea_orm_entity::{
    file_links, project_storages, work_packages,
};
use crate::modules::storages::application::domain::entities::{
    FileLink, NextcloudStorage, OneDriveStorage, ProjectFolderMode, ProjectRef, ProjectStorage,
    Storage, StorageProvider, WORK_PACKAGE_CONTAINER,
};
use crate::modules::storages::application::ports::outgoing::{
    ProjectStorageRepository, ProjectStorageRepositoryError,
};

const DEFAULT_GROUP_FOLDER: &str = "OpenProject";

// =====================================================
// Provider specific columns (storages.provider_fields)
// =====================================================

#[derive(Deserialize)]
struct NextcloudFields {
    username: String,
    password: String,
    #[serde(default)]
    group_folder: Option<String>,
}

#[derive(Deserialize)]
struct OneDriveFields {
    tenant_id: String,
    drive_id: String,
    client_id: String,
    client_secret: String,
}

#[derive(Clone)]
pub struct ProjectStorageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectStorageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    // =====================================================
    // SQL builders
    // =====================================================

    /// Link row joined with its project and storage configuration.
    fn find_stmt(project_storage_id: Uuid) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
              ps.id,
              ps.project_folder_id,
              ps.project_folder_mode,
              p.id   AS project_id,
              p.name AS project_name,
              s.id   AS storage_id,
              s.name AS storage_name,
              s.provider_type,
              s.host,
              s.provider_fields
            FROM project_storages ps
            JOIN projects p ON p.id = ps.project_id
            JOIN storages s ON s.id = ps.storage_id
            WHERE ps.id = $1
            "#,
            vec![project_storage_id.into()],
        )
    }

    fn map_db_err(e: DbErr) -> ProjectStorageRepositoryError {
        ProjectStorageRepositoryError::DatabaseError(e.to_string())
    }

    fn invalid(msg: impl Into<String>) -> ProjectStorageRepositoryError {
        ProjectStorageRepositoryError::InvalidConfiguration(msg.into())
    }

    fn decode_provider(
        provider_type: &str,
        host: Option<String>,
        fields: serde_json::Value,
    ) -> Result<StorageProvider, ProjectStorageRepositoryError> {
        match provider_type {
            "nextcloud" => {
                let host = host
                    .map(|h| h.trim().to_string())
                    .filter(|h| !h.is_empty())
                    .ok_or_else(|| Self::invalid("Nextcloud storage has no host"))?;
                let fields: NextcloudFields = serde_json::from_value(fields)
                    .map_err(|e| Self::invalid(format!("Nextcloud fields: {e}")))?;

                Ok(StorageProvider::Nextcloud(NextcloudStorage::new(
                    host,
                    fields.username,
                    fields.password,
                    fields
                        .group_folder
                        .unwrap_or_else(|| DEFAULT_GROUP_FOLDER.to_string()),
                )))
            }
            "one_drive" => {
                let fields: OneDriveFields = serde_json::from_value(fields)
                    .map_err(|e| Self::invalid(format!("OneDrive fields: {e}")))?;

                Ok(StorageProvider::OneDrive(OneDriveStorage::new(
                    fields.tenant_id,
                    fields.drive_id,
                    fields.client_id,
                    fields.client_secret,
                )))
            }
            other => Err(Self::invalid(format!("unknown provider type `{other}`"))),
        }
    }

    fn decode_row(row: QueryResult) -> Result<ProjectStorage, ProjectStorageRepositoryError> {
        let id: Uuid = row.try_get("", "id").map_err(Self::map_db_err)?;
        let project_folder_id: Option<String> =
            row.try_get("", "project_folder_id").map_err(Self::map_db_err)?;
        let mode: String = row
            .try_get("", "project_folder_mode")
            .map_err(Self::map_db_err)?;
        let project_id: Uuid = row.try_get("", "project_id").map_err(Self::map_db_err)?;
        let project_name: String = row.try_get("", "project_name").map_err(Self::map_db_err)?;
        let storage_id: Uuid = row.try_get("", "storage_id").map_err(Self::map_db_err)?;
        let storage_name: String = row.try_get("", "storage_name").map_err(Self::map_db_err)?;
        let provider_type: String = row.try_get("", "provider_type").map_err(Self::map_db_err)?;
        let host: Option<String> = row.try_get("", "host").map_err(Self::map_db_err)?;
        let provider_fields: serde_json::Value =
            row.try_get("", "provider_fields").map_err(Self::map_db_err)?;

        let project_folder_mode = mode
            .parse::<ProjectFolderMode>()
            .map_err(|e| Self::invalid(e.to_string()))?;
        let provider = Self::decode_provider(&provider_type, host, provider_fields)?;

        Ok(ProjectStorage {
            id,
            project: ProjectRef {
                id: project_id,
                name: project_name,
            },
            storage: Storage {
                id: storage_id,
                name: storage_name,
                provider,
            },
            project_folder_id,
            project_folder_mode,
        })
    }

    /// File links of the project's work packages that point at the link's storage.
    ///
    /// Other projects sharing the storage keep their links.
    fn scoped_file_links(
        project_storage: &ProjectStorage,
    ) -> sea_orm::DeleteMany<file_links::Entity> {
        let project_work_packages = work_packages::Entity::find()
            .select_only()
            .column(work_packages::Column::Id)
            .filter(work_packages::Column::ProjectId.eq(project_storage.project.id))
            .into_query();

        file_links::Entity::delete_many()
            .filter(file_links::Column::StorageId.eq(project_storage.storage.id))
            .filter(file_links::Column::ContainerType.eq(WORK_PACKAGE_CONTAINER))
            .filter(file_links::Column::ContainerId.in_subquery(project_work_packages))
    }

    async fn delete_in_txn(
        txn: &DatabaseTransaction,
        project_storage: &ProjectStorage,
    ) -> Result<u64, ProjectStorageRepositoryError> {
        let removed_links: Vec<FileLink> = Self::scoped_file_links(project_storage)
            .exec_with_returning(txn)
            .await
            .map_err(Self::map_db_err)?
            .into_iter()
            .map(FileLink::from)
            .collect();

        for link in &removed_links {
            tracing::debug!(
                file_link_id = %link.id,
                origin_id = %link.origin_id,
                "Removed file link {}",
                link.origin_name
            );
        }

        let removed = project_storages::Entity::delete_many()
            .filter(project_storages::Column::Id.eq(project_storage.id))
            .exec(txn)
            .await
            .map_err(Self::map_db_err)?;

        if removed.rows_affected == 0 {
            return Err(ProjectStorageRepositoryError::NotFound);
        }

        Ok(removed_links.len() as u64)
    }
}

#[async_trait]
impl ProjectStorageRepository for ProjectStorageRepositoryPostgres {
    async fn find_by_id(
        &self,
        project_storage_id: Uuid,
    ) -> Result<ProjectStorage, ProjectStorageRepositoryError> {
        let row = self
            .db
            .query_one(Self::find_stmt(project_storage_id))
            .await
            .map_err(Self::map_db_err)?
            .ok_or(ProjectStorageRepositoryError::NotFound)?;

        Self::decode_row(row)
    }

    async fn delete_with_file_links(
        &self,
        project_storage: &ProjectStorage,
    ) -> Result<u64, ProjectStorageRepositoryError> {
        let txn = self.db.begin().await.map_err(Self::map_db_err)?;

        let deleted_file_links = match Self::delete_in_txn(&txn, project_storage).await {
            Ok(count) => count,
            Err(e) => {
                let _ = txn.rollback().await;
                return Err(e);
            }
        };

        txn.commit().await.map_err(Self::map_db_err)?;

        Ok(deleted_file_links)
    }
}
