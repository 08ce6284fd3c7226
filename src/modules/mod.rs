pub mod auth;
pub mod storages;
