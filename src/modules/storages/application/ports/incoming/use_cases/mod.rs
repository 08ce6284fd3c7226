mod delete_project_storage;

pub use delete_project_storage::{
    DeleteProjectStorageError, DeleteProjectStorageUseCase, DeletedProjectStorage,
};
