//! Backend operations called by the REST routes and the server functions.

pub mod accounts;
pub mod favorites;
pub mod properties;
