pub mod peripherals;
mod project_permission_query_postgres;
mod project_storage_event_bus;
mod project_storage_repository_postgres;
pub mod sea_orm_entity;

pub use project_permission_query_postgres::ProjectPermissionQueryPostgres;
pub use project_storage_event_bus::{run_audit_logger, ProjectStorageEventBus};
pub use project_storage_repository_postgres::ProjectStorageRepositoryPostgres;
