mod delete_project_storage_service;

pub use delete_project_storage_service::DeleteProjectStorageService;
