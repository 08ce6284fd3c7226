mod delete_project_storage;

pub use delete_project_storage::{
    __path_delete_project_storage_handler, delete_project_storage_handler,
};
