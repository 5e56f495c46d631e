//! Per-user favorite properties.

use thiserror::Error;
use tracing::info;

use crate::db_utils::catalog_utils::get_catalog;
use crate::db_utils::memory_store::get_favorites_store;

#[derive(Debug, Error)]
#[error("property `{0}` does not exist")]
pub struct UnknownProperty(pub String);

async fn ensure_property_exists(property_id: &str) -> anyhow::Result<()> {
    let catalog = get_catalog().await?;
    if !catalog.iter().any(|property| property.id == property_id) {
        return Err(UnknownProperty(property_id.to_string()).into());
    }
    Ok(())
}

pub async fn add_favorite(user_id: &str, property_id: &str) -> anyhow::Result<()> {
    ensure_property_exists(property_id).await?;
    let mut favorites = get_favorites_store().write().await;
    favorites.entry(user_id.to_string()).or_default().insert(property_id.to_string());
    info!("add_favorite: {} -> {}", user_id, property_id);
    Ok(())
}

/// Removing a property that was not a favorite is not an error.
pub async fn remove_favorite(user_id: &str, property_id: &str) -> anyhow::Result<()> {
    ensure_property_exists(property_id).await?;
    let mut favorites = get_favorites_store().write().await;
    if let Some(ids) = favorites.get_mut(user_id) {
        ids.remove(property_id);
    }
    info!("remove_favorite: {} -> {}", user_id, property_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::properties::favorite_ids;

    #[tokio::test]
    async fn add_and_remove_round_trip() {
        let user = "favorites-round-trip-user";
        add_favorite(user, "imv-0001").await.unwrap();
        add_favorite(user, "imv-0001").await.unwrap();
        assert_eq!(favorite_ids(user).await.len(), 1);

        remove_favorite(user, "imv-0001").await.unwrap();
        remove_favorite(user, "imv-0001").await.unwrap();
        assert!(favorite_ids(user).await.is_empty());
    }

    #[tokio::test]
    async fn unknown_property_is_rejected() {
        let err = add_favorite("favorites-unknown-user", "imv-9999").await.unwrap_err();
        assert!(err.downcast_ref::<UnknownProperty>().is_some());
        assert!(favorite_ids("favorites-unknown-user").await.is_empty());
    }
}
