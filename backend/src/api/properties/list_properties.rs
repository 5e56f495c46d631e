//! `GET /api/properties`: filter, sort and page the catalog.

use std::collections::HashSet;

use common::listing_const::PAGE_SIZE;
use common::listing_query::{clamp_limit, ListingQuery, LIMIT_PARAM};
use common::property::{PageMeta, PropertyPage};
use common::query_codec::{decode, parse_pairs, sort_specs};
use tracing::info;

use crate::api::properties::filter_schema::get_filter_schema;
use crate::api::properties::property_filter::PropertyFilter;
use crate::api::properties::property_sort::sort_properties;
use crate::db_utils::catalog_utils::get_catalog;
use crate::db_utils::memory_store::get_favorites_store;

/// Page size when the request has no `limit`.
pub fn configured_page_size() -> u64 {
    let page_size = std::env::var("AUCTION_PAGE_SIZE").unwrap_or(PAGE_SIZE.to_string());
    clamp_limit(page_size.trim().parse::<u64>().unwrap_or(PAGE_SIZE))
}

pub async fn favorite_ids(user_id: &str) -> HashSet<String> {
    let favorites = get_favorites_store().read().await;
    favorites.get(user_id).cloned().unwrap_or_default()
}

pub async fn list_properties(query: &str, user_id: &str) -> anyhow::Result<PropertyPage> {
    let mut listing = ListingQuery::parse(query);
    if !parse_pairs(query).iter().any(|(name, _)| name == LIMIT_PARAM) {
        listing.limit = configured_page_size();
    }
    let schema = get_filter_schema().await?;
    let selections = decode(&listing.filters, &schema);
    let favorites = favorite_ids(user_id).await;

    let mut filter = PropertyFilter::from_selections(&selections);
    filter.search = listing.search.clone();
    if listing.show_only_favorites {
        filter.favorites_only = Some(favorites.clone());
    }

    let catalog = get_catalog().await?;
    let mut matching = catalog.iter().filter(|property| filter.matches(property)).cloned().collect::<Vec<_>>();
    sort_properties(&mut matching, &sort_specs(&selections, "sort"));

    let meta = PageMeta::new(matching.len() as u64, listing.limit);
    let offset = usize::try_from(listing.page.saturating_sub(1).saturating_mul(listing.limit)).unwrap_or(usize::MAX);
    let data = matching
        .into_iter()
        .skip(offset)
        .take(usize::try_from(listing.limit).unwrap_or(usize::MAX))
        .map(|mut property| {
            property.is_favorite = favorites.contains(&property.id);
            property
        })
        .collect::<Vec<_>>();
    info!(
        "list_properties: page {} of {} ({} matching) for {}",
        listing.page, meta.pages, meta.total, user_id
    );
    Ok(PropertyPage { data, meta })
}
