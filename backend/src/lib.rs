//! Backend library: listing, favorites and account operations plus their REST routes.

pub mod api;
pub mod db_utils;
pub mod server_extra;
