//! `QueryLocation` backed by the router: the query lives in the `/auction-list` URL.

use common::listing_query::ListingQuery;
use common::query_location::QueryLocation;
use dioxus::prelude::*;

use crate::routes::Route;

pub struct RouterLocation {
    listing: ListingQuery,
}

impl RouterLocation {
    pub fn new(listing: ListingQuery) -> Self {
        Self { listing }
    }

    /// Navigates with a history entry, so "back" returns to the previous filters.
    pub fn push_query(&self, query: &str) {
        navigator().push(Route::auction_list(ListingQuery::parse(query)));
    }
}

impl QueryLocation for RouterLocation {
    fn current_query(&self) -> String {
        self.listing.url_query()
    }

    fn replace_query(&self, query: &str) {
        navigator().replace(Route::auction_list(ListingQuery::parse(query)));
    }
}
