use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create member_permissions table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(MemberPermissions::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(MemberPermissions::UserId).uuid().not_null())
                    .col(ColumnDef::new(MemberPermissions::ProjectId).uuid().not_null())
                    .col(
                        ColumnDef::new(MemberPermissions::Permission)
                            .string_len(100)
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(MemberPermissions::UserId)
                            .col(MemberPermissions::ProjectId)
                            .col(MemberPermissions::Permission),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_permissions_user_id")
                            .from(MemberPermissions::Table, MemberPermissions::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_member_permissions_project_id")
                            .from(MemberPermissions::Table, MemberPermissions::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Permission checks look up (user, project)
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_member_permissions_project_id
                ON member_permissions (project_id);
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
                DROP INDEX IF EXISTS idx_member_permissions_project_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(MemberPermissions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MemberPermissions {
    Table,
    UserId,
    ProjectId,
    Permission,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Projects {
    Table,
    Id,
}
