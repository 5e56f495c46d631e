//! Client API calls for the listing, the filter schema and favorites.

use common::{filter_schema::FilterSchema, property::PropertyPage};
use dioxus::prelude::*;

#[server]
pub async fn get_filter_schema() -> Result<FilterSchema, ServerFnError> {
    let x = backend::api::properties::get_filter_schema().await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

/// `api_query` is `ListingQuery::to_api_query()`.
#[server]
pub async fn list_properties(api_query: String, user_id: String) -> Result<PropertyPage, ServerFnError> {
    let x = backend::api::properties::list_properties(&api_query, &user_id).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn add_favorite(user_id: String, property_id: String) -> Result<(), ServerFnError> {
    let x = backend::api::favorites::add_favorite(&user_id, &property_id).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

#[server]
pub async fn remove_favorite(user_id: String, property_id: String) -> Result<(), ServerFnError> {
    let x = backend::api::favorites::remove_favorite(&user_id, &property_id).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}
