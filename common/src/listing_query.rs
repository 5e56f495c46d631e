//! The full `/auction-list` query: paging, search and the encoded filters.
//!
//! The filter bar only knows about filter parameters, so the reserved keys
//! are split off here and put back when the URL or the API request is built.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::listing_const::{MAX_PAGE_SIZE, PAGE_SIZE};
use crate::query_codec::{parse_pairs, serialize_pairs};

pub const PAGE_PARAM: &str = "page";
pub const LIMIT_PARAM: &str = "limit";
pub const SEARCH_PARAM: &str = "q";
pub const FAVORITES_PARAM: &str = "showOnlyFavorites";

pub const RESERVED_PARAMS: [&str; 4] = [PAGE_PARAM, LIMIT_PARAM, SEARCH_PARAM, FAVORITES_PARAM];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingQuery {
    /// 1-based.
    pub page: u64,
    pub limit: u64,
    pub search: String,
    pub show_only_favorites: bool,
    /// Encoded filter parameters, without any reserved key.
    pub filters: String,
}

impl Default for ListingQuery {
    fn default() -> Self {
        Self {
            page: 1,
            limit: PAGE_SIZE,
            search: String::new(),
            show_only_favorites: false,
            filters: String::new(),
        }
    }
}

/// Page size a client asked for, clamped to what the API serves.
pub fn clamp_limit(limit: u64) -> u64 {
    limit.clamp(1, MAX_PAGE_SIZE)
}

impl ListingQuery {
    pub fn parse(query: &str) -> Self {
        let mut listing = ListingQuery::default();
        let mut filters = Vec::new();
        for (name, value) in parse_pairs(query) {
            match name.as_str() {
                PAGE_PARAM => listing.page = value.trim().parse::<u64>().unwrap_or(1).max(1),
                LIMIT_PARAM => listing.limit = clamp_limit(value.trim().parse::<u64>().unwrap_or(PAGE_SIZE)),
                SEARCH_PARAM => listing.search = value,
                FAVORITES_PARAM => listing.show_only_favorites = value == "true",
                _ => filters.push((name, value)),
            }
        }
        listing.filters = serialize_pairs(&filters);
        listing
    }

    /// New filters from the filter bar; the listing goes back to page 1.
    pub fn with_filters(&self, filters: impl Into<String>) -> Self {
        Self { page: 1, filters: filters.into(), ..self.clone() }
    }

    /// Rewrites the filters in place, keeping the page. Used when the bar
    /// hydrates from the URL it was loaded with.
    pub fn replace_filters(&self, filters: impl Into<String>) -> Self {
        Self { filters: filters.into(), ..self.clone() }
    }

    pub fn with_page(&self, page: u64) -> Self {
        Self { page: page.max(1), ..self.clone() }
    }

    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self { page: 1, search: search.into(), ..self.clone() }
    }

    pub fn with_show_only_favorites(&self, show_only_favorites: bool) -> Self {
        Self { page: 1, show_only_favorites, ..self.clone() }
    }

    /// What goes in the address bar. Values at their defaults are left out.
    pub fn url_query(&self) -> String {
        let mut pairs = self.filter_pairs();
        if self.page != 1 {
            pairs.push((PAGE_PARAM.to_string(), self.page.to_string()));
        }
        if self.limit != PAGE_SIZE {
            pairs.push((LIMIT_PARAM.to_string(), self.limit.to_string()));
        }
        self.push_search_params(&mut pairs);
        serialize_pairs(&pairs)
    }

    /// Parameters for `GET /api/properties`; paging is always explicit.
    pub fn to_api_query(&self) -> String {
        let mut pairs = vec![
            (PAGE_PARAM.to_string(), self.page.to_string()),
            (LIMIT_PARAM.to_string(), self.limit.to_string()),
        ];
        pairs.extend(self.filter_pairs());
        self.push_search_params(&mut pairs);
        serialize_pairs(&pairs)
    }

    fn filter_pairs(&self) -> Vec<(String, String)> {
        parse_pairs(&self.filters)
            .into_iter()
            .filter(|(name, _)| !RESERVED_PARAMS.contains(&name.as_str()))
            .collect()
    }

    fn push_search_params(&self, pairs: &mut Vec<(String, String)>) {
        if !self.search.trim().is_empty() {
            pairs.push((SEARCH_PARAM.to_string(), self.search.trim().to_string()));
        }
        if self.show_only_favorites {
            pairs.push((FAVORITES_PARAM.to_string(), "true".to_string()));
        }
    }
}

impl From<&str> for ListingQuery {
    fn from(query: &str) -> Self {
        ListingQuery::parse(query)
    }
}

impl fmt::Display for ListingQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.url_query())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_keys_are_split_from_filters() {
        let listing = ListingQuery::parse("?sort=precoSegundoLeilao:asc&page=3&q=casa+azul&propertyType=Casa&showOnlyFavorites=true");
        assert_eq!(listing.page, 3);
        assert_eq!(listing.limit, PAGE_SIZE);
        assert_eq!(listing.search, "casa azul");
        assert!(listing.show_only_favorites);
        assert_eq!(listing.filters, "sort=precoSegundoLeilao:asc&propertyType=Casa");
    }

    #[test]
    fn bad_paging_falls_back_to_defaults() {
        let listing = ListingQuery::parse("page=0&limit=5000");
        assert_eq!(listing.page, 1);
        assert_eq!(listing.limit, MAX_PAGE_SIZE);
        assert_eq!(ListingQuery::parse("page=abc").page, 1);
    }

    #[test]
    fn url_query_recomposes_reserved_keys_after_filters() {
        let listing = ListingQuery::parse("q=Recife&page=2&modality=vendaOnline");
        assert_eq!(listing.url_query(), "modality=vendaOnline&page=2&q=Recife");
        assert_eq!(listing.to_string(), listing.url_query());
        assert_eq!(ListingQuery::default().url_query(), "");
    }

    #[test]
    fn api_query_always_carries_paging() {
        let listing = ListingQuery::default().with_filters("sort=descontoSegundoLeilao:desc");
        assert_eq!(listing.to_api_query(), "page=1&limit=12&sort=descontoSegundoLeilao:desc");
    }

    #[test]
    fn reserved_keys_never_leak_from_filters() {
        let listing = ListingQuery::default().with_filters("page=9&propertyType=Casa");
        assert_eq!(listing.url_query(), "propertyType=Casa");
    }

    #[test]
    fn filter_and_search_changes_reset_the_page() {
        let listing = ListingQuery::parse("page=4&propertyType=Casa");
        assert_eq!(listing.with_filters("propertyType=Loja").page, 1);
        assert_eq!(listing.with_search("centro").page, 1);
        assert_eq!(listing.with_show_only_favorites(true).page, 1);
        assert_eq!(listing.replace_filters("sort=descontoSegundoLeilao:desc&propertyType=Casa").page, 4);
    }

    #[test]
    fn parse_inverts_url_query() {
        let listing = ListingQuery {
            page: 2,
            limit: 24,
            search: "São Paulo".into(),
            show_only_favorites: true,
            filters: "propertyType=Casa,Imóvel+rural&priceMin=0&priceMax=300000".into(),
        };
        assert_eq!(ListingQuery::parse(&listing.url_query()), listing);
    }
}
