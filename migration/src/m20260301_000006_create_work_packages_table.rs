use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkPackages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WorkPackages::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(WorkPackages::ProjectId).uuid().not_null())
                    .col(ColumnDef::new(WorkPackages::Subject).string_len(255).not_null())
                    .col(
                        ColumnDef::new(WorkPackages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_work_packages_project_id")
                            .from(WorkPackages::Table, WorkPackages::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_work_packages_project_id
                ON work_packages (project_id);
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
                DROP INDEX IF EXISTS idx_work_packages_project_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(WorkPackages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum WorkPackages {
    Table,
    Id,
    ProjectId,
    Subject,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
}
