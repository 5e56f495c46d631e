pub mod properties_api;
pub mod auth_api;
