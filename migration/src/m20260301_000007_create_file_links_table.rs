use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create file_links table
        // =====================================================
        // container_id/container_type is polymorphic ("WorkPackage", ...)
        // so it carries no foreign key.
        manager
            .create_table(
                Table::create()
                    .table(FileLinks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(FileLinks::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(FileLinks::StorageId).uuid().not_null())
                    .col(ColumnDef::new(FileLinks::ContainerId).uuid().not_null())
                    .col(ColumnDef::new(FileLinks::ContainerType).string_len(50).not_null())
                    .col(ColumnDef::new(FileLinks::OriginId).text().not_null())
                    .col(ColumnDef::new(FileLinks::OriginName).text().not_null())
                    .col(
                        ColumnDef::new(FileLinks::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_file_links_storage_id")
                            .from(FileLinks::Table, FileLinks::StorageId)
                            .to(Storages::Table, Storages::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Project storage deletion selects links by storage and container
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_file_links_storage_container
                ON file_links (storage_id, container_type, container_id);
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
                DROP INDEX IF EXISTS idx_file_links_storage_container;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(FileLinks::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FileLinks {
    Table,
    Id,
    StorageId,
    ContainerId,
    ContainerType,
    OriginId,
    OriginName,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Storages {
    Table,
    Id,
}
