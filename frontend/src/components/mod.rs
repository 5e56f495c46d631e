pub mod navbar;
pub mod breadcrumb;
pub mod error_boundary;
pub mod suspend_boundary;
pub mod protected_route;
pub mod auth_form;
pub mod filter_components;
pub mod listing_components;
