use crate::storages::application::ports::incoming::use_cases::DeleteProjectStorageUseCase;
use crate::storages::application::storage_use_cases::StorageUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    storages: StorageUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            storages: StorageUseCases {
                delete_project_storage: Arc::new(StubDeleteProjectStorageUseCase),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_delete_project_storage(
        mut self,
        uc: impl DeleteProjectStorageUseCase + Send + Sync + 'static,
    ) -> Self {
        self.storages.delete_project_storage = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            storages: self.storages,
        })
    }
}
