use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create storages table
        // =====================================================
        // provider_fields holds the provider specific settings:
        //   nextcloud  → { username, password, group_folder }
        //   one_drive  → { tenant_id, drive_id, client_id, client_secret }
        manager
            .create_table(
                Table::create()
                    .table(Storages::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Storages::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Storages::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Storages::ProviderType).string_len(50).not_null())
                    .col(ColumnDef::new(Storages::Host).text())
                    .col(
                        ColumnDef::new(Storages::ProviderFields)
                            .json_binary()
                            .not_null()
                            .default(Expr::cust("'{}'::jsonb")),
                    )
                    .col(
                        ColumnDef::new(Storages::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Storages::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Storages {
    Table,
    Id,
    Name,
    ProviderType,
    Host,
    ProviderFields,
    CreatedAt,
}
