use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProjectStorageEventKind {
    ProjectStorageDestroyed,
}

impl ProjectStorageEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStorageEventKind::ProjectStorageDestroyed => "PROJECT_STORAGE_DESTROYED",
        }
    }
}

/// Lifecycle notification emitted after a project storage change is committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectStorageEvent {
    pub kind: ProjectStorageEventKind,
    pub project_storage_id: Uuid,
    pub project_id: Uuid,
    pub storage_id: Uuid,
    pub occurred_at: DateTime<Utc>,
}

impl ProjectStorageEvent {
    pub fn destroyed(project_storage_id: Uuid, project_id: Uuid, storage_id: Uuid) -> Self {
        Self {
            kind: ProjectStorageEventKind::ProjectStorageDestroyed,
            project_storage_id,
            project_id,
            storage_id,
            occurred_at: Utc::now(),
        }
    }
}
