use async_trait::async_trait;
use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, Statement};
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::modules::storages::application::ports::outgoing::{
    ProjectPermission, ProjectPermissionQuery, ProjectPermissionQueryError,
};

#[derive(Clone)]
pub struct ProjectPermissionQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectPermissionQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    /// Admins hold every permission; everyone else needs a membership grant.
    fn allowed_stmt(actor: Uuid, project_id: Uuid, permission: &str) -> Statement {
        Statement::from_sql_and_values(
            DatabaseBackend::Postgres,
            r#"
            SELECT
              EXISTS (
                SELECT 1
                FROM users u
                WHERE u.id = $1
                  AND u.admin = true
              )
              OR EXISTS (
                SELECT 1
                FROM member_permissions mp
                WHERE mp.user_id = $1
                  AND mp.project_id = $2
                  AND mp.permission = $3
              ) AS allowed
            "#,
            vec![actor.into(), project_id.into(), permission.into()],
        )
    }

    fn map_db_err(e: DbErr) -> ProjectPermissionQueryError {
        ProjectPermissionQueryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl ProjectPermissionQuery for ProjectPermissionQueryPostgres {
    async fn is_allowed(
        &self,
        actor: UserId,
        project_id: Uuid,
        permission: ProjectPermission,
    ) -> Result<bool, ProjectPermissionQueryError> {
        let row = self
            .db
            .query_one(Self::allowed_stmt(
                actor.into(),
                project_id,
                permission.as_str(),
            ))
            .await
            .map_err(Self::map_db_err)?;

        match row {
            Some(row) => row.try_get::<bool>("", "allowed").map_err(Self::map_db_err),
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::sea_query::Value;
    use sea_orm::MockDatabase;
    use std::collections::BTreeMap;

    fn allowed_row(allowed: bool) -> BTreeMap<String, Value> {
        BTreeMap::from([("allowed".to_string(), Value::Bool(Some(allowed)))])
    }

    #[tokio::test]
    async fn test_member_with_permission_is_allowed() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![allowed_row(true)]])
            .into_connection();

        let query = ProjectPermissionQueryPostgres::new(Arc::new(db));

        let allowed = query
            .is_allowed(
                UserId::from(Uuid::new_v4()),
                Uuid::new_v4(),
                ProjectPermission::ManageStoragesInProject,
            )
            .await
            .unwrap();

        assert!(allowed);
    }

    #[tokio::test]
    async fn test_member_without_permission_is_denied() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![allowed_row(false)]])
            .into_connection();

        let query = ProjectPermissionQueryPostgres::new(Arc::new(db));

        let allowed = query
            .is_allowed(
                UserId::from(Uuid::new_v4()),
                Uuid::new_v4(),
                ProjectPermission::ManageStoragesInProject,
            )
            .await
            .unwrap();

        assert!(!allowed);
    }

    #[tokio::test]
    async fn test_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection error".to_string())])
            .into_connection();

        let query = ProjectPermissionQueryPostgres::new(Arc::new(db));

        let res = query
            .is_allowed(
                UserId::from(Uuid::new_v4()),
                Uuid::new_v4(),
                ProjectPermission::ManageStoragesInProject,
            )
            .await;

        assert!(matches!(
            res.unwrap_err(),
            ProjectPermissionQueryError::DatabaseError(_)
        ));
    }

    #[tokio::test]
    async fn test_undecodable_result_is_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![BTreeMap::from([(
                "allowed".to_string(),
                Value::String(Some(Box::new("yes".to_string()))),
            )])]])
            .into_connection();

        let query = ProjectPermissionQueryPostgres::new(Arc::new(db));

        let res = query
            .is_allowed(
                UserId::from(Uuid::new_v4()),
                Uuid::new_v4(),
                ProjectPermission::ManageStoragesInProject,
            )
            .await;

        assert!(matches!(
            res.unwrap_err(),
            ProjectPermissionQueryError::DatabaseError(_)
        ));
    }

    #[test]
    fn test_statement_binds_permission_name() {
        let stmt = ProjectPermissionQueryPostgres::allowed_stmt(
            Uuid::new_v4(),
            Uuid::new_v4(),
            ProjectPermission::ManageStoragesInProject.as_str(),
        );

        assert!(stmt.to_string().contains("'manage_storages_in_project'"));
    }
}
