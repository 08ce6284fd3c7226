use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create project_storages table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ProjectStorages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProjectStorages::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(ProjectStorages::ProjectId).uuid().not_null())
                    .col(ColumnDef::new(ProjectStorages::StorageId).uuid().not_null())
                    .col(ColumnDef::new(ProjectStorages::ProjectFolderId).text())
                    .col(
                        ColumnDef::new(ProjectStorages::ProjectFolderMode)
                            .string_len(20)
                            .not_null()
                            .default("disabled"),
                    )
                    .col(
                        ColumnDef::new(ProjectStorages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_storages_project_id")
                            .from(ProjectStorages::Table, ProjectStorages::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_project_storages_storage_id")
                            .from(ProjectStorages::Table, ProjectStorages::StorageId)
                            .to(Storages::Table, Storages::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes and constraints
        // =====================================================

        // A storage is linked to a project at most once
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX IF NOT EXISTS idx_project_storages_project_storage_unique
                ON project_storages (project_id, storage_id);
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE project_storages
                ADD CONSTRAINT chk_project_storages_folder_mode
                CHECK (project_folder_mode IN ('automatic', 'manual', 'disabled'));
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_project_storages_project_storage_unique;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProjectStorages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProjectStorages {
    Table,
    Id,
    ProjectId,
    StorageId,
    ProjectFolderId,
    ProjectFolderMode,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Storages {
    Table,
    Id,
}
