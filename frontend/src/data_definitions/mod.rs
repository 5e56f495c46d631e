pub mod auth_session;
pub mod router_location;
pub mod menu;
