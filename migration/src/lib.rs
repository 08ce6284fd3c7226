pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_users_table;
mod m20260301_000002_create_projects_table;
mod m20260301_000003_create_member_permissions_table;
mod m20260301_000004_create_storages_table;
mod m20260301_000005_create_project_storages_table;
mod m20260301_000006_create_work_packages_table;
mod m20260301_000007_create_file_links_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_users_table::Migration),
            Box::new(m20260301_000002_create_projects_table::Migration),
            Box::new(m20260301_000003_create_member_permissions_table::Migration),
            Box::new(m20260301_000004_create_storages_table::Migration),
            Box::new(m20260301_000005_create_project_storages_table::Migration),
            Box::new(m20260301_000006_create_work_packages_table::Migration),
            Box::new(m20260301_000007_create_file_links_table::Migration),
        ]
    }
}
