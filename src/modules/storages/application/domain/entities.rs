use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use uuid::Uuid;

// ============================================================================
// Project folder mode
// ============================================================================

/// Who owns the lifecycle of the remote project folder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectFolderMode {
    /// The folder is created and removed by this system.
    Automatic,
    /// The user picked an existing folder; it is never touched remotely.
    Manual,
    Disabled,
}

impl ProjectFolderMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectFolderMode::Automatic => "automatic",
            ProjectFolderMode::Manual => "manual",
            ProjectFolderMode::Disabled => "disabled",
        }
    }
}

impl fmt::Display for ProjectFolderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown project folder mode `{0}`")]
pub struct UnknownProjectFolderMode(pub String);

impl FromStr for ProjectFolderMode {
    type Err = UnknownProjectFolderMode;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "automatic" => Ok(ProjectFolderMode::Automatic),
            "manual" => Ok(ProjectFolderMode::Manual),
            "disabled" => Ok(ProjectFolderMode::Disabled),
            other => Err(UnknownProjectFolderMode(other.to_string())),
        }
    }
}

// ============================================================================
// Storage configuration
// ============================================================================

/// Nextcloud storage. Folders are addressed by WebDAV path.
#[derive(Clone, PartialEq, Eq)]
pub struct NextcloudStorage {
    pub host: String,
    pub username: String,
    password: String,
    /// Root folder holding the managed project folders.
    pub group_folder: String,
}

impl NextcloudStorage {
    pub fn new(
        host: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
        group_folder: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            username: username.into(),
            password: password.into(),
            group_folder: group_folder.into(),
        }
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for NextcloudStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NextcloudStorage")
            .field("host", &self.host)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .field("group_folder", &self.group_folder)
            .finish()
    }
}

/// OneDrive / SharePoint storage. Folders are addressed by drive item id.
#[derive(Clone, PartialEq, Eq)]
pub struct OneDriveStorage {
    pub tenant_id: String,
    pub drive_id: String,
    pub client_id: String,
    client_secret: String,
}

impl OneDriveStorage {
    pub fn new(
        tenant_id: impl Into<String>,
        drive_id: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> Self {
        Self {
            tenant_id: tenant_id.into(),
            drive_id: drive_id.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }
}

impl fmt::Debug for OneDriveStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OneDriveStorage")
            .field("tenant_id", &self.tenant_id)
            .field("drive_id", &self.drive_id)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageProvider {
    Nextcloud(NextcloudStorage),
    OneDrive(OneDriveStorage),
}

impl StorageProvider {
    pub fn provider_type(&self) -> &'static str {
        match self {
            StorageProvider::Nextcloud(_) => "nextcloud",
            StorageProvider::OneDrive(_) => "one_drive",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Storage {
    pub id: Uuid,
    pub name: String,
    pub provider: StorageProvider,
}

// ============================================================================
// Project storage link
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRef {
    pub id: Uuid,
    pub name: String,
}

/// Binding of a project to a remote storage, with the project folder metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectStorage {
    pub id: Uuid,
    pub project: ProjectRef,
    pub storage: Storage,
    pub project_folder_id: Option<String>,
    pub project_folder_mode: ProjectFolderMode,
}

impl ProjectStorage {
    fn folder_id(&self) -> Option<&str> {
        self.project_folder_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }

    /// A remote folder is only removed when this system created it and knows where it is.
    pub fn requires_remote_folder_deletion(&self) -> bool {
        self.project_folder_mode == ProjectFolderMode::Automatic && self.folder_id().is_some()
    }

    /// `{group_folder}/{project name} ({project id})/`
    ///
    /// Slashes in the project name would open new path segments, so they become `|`.
    pub fn managed_project_folder_path(&self) -> String {
        let group_folder = match &self.storage.provider {
            StorageProvider::Nextcloud(nextcloud) => nextcloud.group_folder.trim_matches('/'),
            StorageProvider::OneDrive(_) => "",
        };
        let folder_name = format!("{} ({})", self.project.name.replace('/', "|"), self.project.id);

        if group_folder.is_empty() {
            format!("{folder_name}/")
        } else {
            format!("{group_folder}/{folder_name}/")
        }
    }

    /// Path (Nextcloud) or item id (OneDrive) addressing the remote project folder.
    pub fn project_folder_location(&self) -> Option<String> {
        match &self.storage.provider {
            StorageProvider::Nextcloud(_) => Some(self.managed_project_folder_path()),
            StorageProvider::OneDrive(_) => self.folder_id().map(str::to_string),
        }
    }
}

// ============================================================================
// File links
// ============================================================================

pub const WORK_PACKAGE_CONTAINER: &str = "WorkPackage";

/// Binding of a work package to a file on a remote storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLink {
    pub id: Uuid,
    pub storage_id: Uuid,
    pub container_id: Uuid,
    pub container_type: String,
    pub origin_id: String,
    pub origin_name: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nextcloud() -> Storage {
        Storage {
            id: Uuid::new_v4(),
            name: "Team cloud".to_string(),
            provider: StorageProvider::Nextcloud(NextcloudStorage::new(
                "https://cloud.example.com",
                "OpenProject",
                "app-password",
                "OpenProject",
            )),
        }
    }

    fn one_drive() -> Storage {
        Storage {
            id: Uuid::new_v4(),
            name: "SharePoint".to_string(),
            provider: StorageProvider::OneDrive(OneDriveStorage::new(
                "tenant", "drive-1", "client", "secret",
            )),
        }
    }

    fn project_storage(
        storage: Storage,
        folder_id: Option<&str>,
        mode: ProjectFolderMode,
    ) -> ProjectStorage {
        ProjectStorage {
            id: Uuid::new_v4(),
            project: ProjectRef {
                id: Uuid::parse_str("6f1c1d8e-30a5-4a59-9a64-0d6e4a0c7d11").unwrap(),
                name: "Mars rover".to_string(),
            },
            storage,
            project_folder_id: folder_id.map(str::to_string),
            project_folder_mode: mode,
        }
    }

    #[test]
    fn automatic_mode_with_folder_requires_remote_deletion() {
        let ps = project_storage(nextcloud(), Some("1337"), ProjectFolderMode::Automatic);
        assert!(ps.requires_remote_folder_deletion());
    }

    #[test]
    fn manual_mode_never_requires_remote_deletion() {
        let ps = project_storage(nextcloud(), Some("1337"), ProjectFolderMode::Manual);
        assert!(!ps.requires_remote_folder_deletion());
    }

    #[test]
    fn disabled_mode_never_requires_remote_deletion() {
        let ps = project_storage(one_drive(), Some("1337"), ProjectFolderMode::Disabled);
        assert!(!ps.requires_remote_folder_deletion());
    }

    #[test]
    fn automatic_mode_without_folder_id_is_skipped() {
        let missing = project_storage(nextcloud(), None, ProjectFolderMode::Automatic);
        let blank = project_storage(nextcloud(), Some("  "), ProjectFolderMode::Automatic);

        assert!(!missing.requires_remote_folder_deletion());
        assert!(!blank.requires_remote_folder_deletion());
    }

    #[test]
    fn nextcloud_location_is_the_managed_folder_path() {
        let ps = project_storage(nextcloud(), Some("1337"), ProjectFolderMode::Automatic);

        assert_eq!(
            ps.project_folder_location().as_deref(),
            Some("OpenProject/Mars rover (6f1c1d8e-30a5-4a59-9a64-0d6e4a0c7d11)/")
        );
    }

    #[test]
    fn managed_folder_path_replaces_slashes_in_project_name() {
        let mut ps = project_storage(nextcloud(), Some("1"), ProjectFolderMode::Automatic);
        ps.project.name = "R&D / Hardware".to_string();

        assert!(ps
            .managed_project_folder_path()
            .starts_with("OpenProject/R&D | Hardware ("));
    }

    #[test]
    fn one_drive_location_is_the_folder_id() {
        let ps = project_storage(one_drive(), Some("01ABCDEF"), ProjectFolderMode::Automatic);
        assert_eq!(ps.project_folder_location().as_deref(), Some("01ABCDEF"));

        let without = project_storage(one_drive(), None, ProjectFolderMode::Automatic);
        assert_eq!(without.project_folder_location(), None);
    }

    #[test]
    fn folder_mode_parses_known_values_only() {
        assert_eq!("automatic".parse(), Ok(ProjectFolderMode::Automatic));
        assert_eq!("manual".parse(), Ok(ProjectFolderMode::Manual));
        assert_eq!("disabled".parse(), Ok(ProjectFolderMode::Disabled));
        assert_eq!(
            "inactive".parse::<ProjectFolderMode>(),
            Err(UnknownProjectFolderMode("inactive".to_string()))
        );
    }

    #[test]
    fn debug_output_redacts_secrets() {
        let rendered = format!("{:?} {:?}", nextcloud(), one_drive());

        assert!(!rendered.contains("app-password"));
        assert!(!rendered.contains("\"secret\""));
        assert!(rendered.contains("[REDACTED]"));
    }
}
