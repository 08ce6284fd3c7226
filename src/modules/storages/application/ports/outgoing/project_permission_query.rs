use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectPermission {
    ManageStoragesInProject,
}

impl ProjectPermission {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectPermission::ManageStoragesInProject => "manage_storages_in_project",
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectPermissionQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[async_trait]
pub trait ProjectPermissionQuery: Send + Sync {
    async fn is_allowed(
        &self,
        actor: UserId,
        project_id: Uuid,
        permission: ProjectPermission,
    ) -> Result<bool, ProjectPermissionQueryError>;
}
