use std::sync::Arc;

use crate::modules::storages::application::ports::incoming::use_cases::DeleteProjectStorageUseCase;

#[derive(Clone)]
pub struct StorageUseCases {
    pub delete_project_storage: Arc<dyn DeleteProjectStorageUseCase + Send + Sync>,
}
