//! Process-wide stores backing the API.

pub mod catalog_utils;
pub mod memory_store;
