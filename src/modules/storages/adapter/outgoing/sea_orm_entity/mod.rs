pub mod file_links;
pub mod project_storages;
pub mod work_packages;
