//! `/auction-list`: the filter bar, the property grid and pagination.
//!
//! The URL is the source of truth for the applied filters. The filter bar
//! writes it (replace on hydration, push on apply) and follows it on
//! back/forward; the listing is fetched from whatever the URL holds.

use common::filter_bar::{Emitted, FilterBar, FilterBarEvent};
use common::filter_schema::FilterSchema;
use common::fetch_generation::FetchGenerations;
use common::listing_query::ListingQuery;
use common::property::PropertyPage;
use common::query_codec::encode;
use common::query_location::QueryLocation;
use dioxus::logger::tracing::{debug, error, info};
use dioxus::prelude::*;

use crate::api::properties_api::{add_favorite, get_filter_schema, list_properties, remove_favorite};
use crate::components::breadcrumb::Breadcrumb;
use crate::components::filter_components::filter_bar_view::FilterBarView;
use crate::components::listing_components::property_grid::PropertyGridView;
use crate::components::protected_route::ProtectedRoute;
use crate::data_definitions::auth_session::use_auth_session;
use crate::data_definitions::router_location::RouterLocation;

#[derive(Clone, Copy)]
pub struct FilterBarControl {
    /// `None` until a valid schema arrived.
    pub schema: ReadSignal<Option<FilterSchema>>,
    pub filter_bar: ReadSignal<FilterBar>,
    pub dispatch: Callback<FilterBarEvent>,
}

#[derive(Clone, Copy)]
pub struct ListingState {
    pub listing: ReadSignal<ListingQuery>,
    /// `None` before the first response.
    pub page: ReadSignal<Option<PropertyPage>>,
    pub loading: ReadSignal<bool>,
    pub navigate: Callback<ListingQuery>,
    pub toggle_favorite: Callback<String>,
}

#[component]
pub fn AuctionListPage(query: ListingQuery) -> Element {
    rsx! {
        Title { "Play Leilões - Imóveis" }
        Breadcrumb { current: "Imóveis".to_string() }
        ProtectedRoute {
            AuctionListRootComponent { query }
        }
    }
}

#[component]
fn AuctionListRootComponent(query: ReadSignal<ListingQuery>) -> Element {
    let auth = use_auth_session();

    let schema_resource = use_resource(get_filter_schema);
    let schema = use_memo(move || match &*schema_resource.read() {
        Some(Ok(schema)) => match schema.validate() {
            Ok(()) => Some(schema.clone()),
            Err(e) => {
                error!("Filter schema rejected: {e}");
                None
            }
        },
        Some(Err(e)) => {
            error!("Filter schema fetch failed: {e:#?}");
            None
        }
        None => None,
    });

    let mut filter_bar = use_signal(FilterBar::default);

    let dispatch = Callback::new(move |event: FilterBarEvent| {
        let schema = schema.peek();
        let Some(schema) = schema.as_ref() else {
            debug!("no schema yet, dropping {event:?}");
            return;
        };
        let is_hydration = matches!(event, FilterBarEvent::SchemaLoaded { .. });
        let current = filter_bar.peek().clone();
        let (next, emitted) = current.handle(event, schema);
        filter_bar.set(next);

        let Some(Emitted { query: filters }) = emitted else {
            return;
        };
        let listing = query.peek().clone();
        let location = RouterLocation::new(listing.clone());
        if is_hydration {
            // keep the page the URL was opened with
            if location.sync_query(&listing.replace_filters(filters).url_query()) {
                info!("Rewrote listing URL with the default filters");
            }
        } else {
            location.push_query(&listing.with_filters(filters).url_query());
        }
    });

    // hydrate once the schema is in
    use_effect(move || {
        if schema.read().is_some() && !filter_bar.peek().is_ready() {
            let url_query = query.peek().filters.clone();
            dispatch.call(FilterBarEvent::SchemaLoaded { url_query });
        }
    });

    // back/forward and pasted URLs
    let url_filters = use_memo(move || query.read().filters.clone());
    use_effect(move || {
        let url_filters = url_filters();
        let schema = schema.peek();
        let Some(schema) = schema.as_ref() else {
            return;
        };
        let in_sync = filter_bar.peek().applied().map(|applied| encode(applied, schema) == url_filters);
        if in_sync == Some(false) {
            dispatch.call(FilterBarEvent::UrlChanged { url_query: url_filters });
        }
    });

    let mut generations = use_signal(FetchGenerations::default);
    let mut listing_page = use_signal(|| None::<PropertyPage>);
    let mut loading = use_signal(|| false);
    let bar_ready = use_memo(move || filter_bar.read().is_ready());

    use_effect(move || {
        let listing = query.read().clone();
        if !bar_ready() {
            return;
        }
        let ticket = generations.write().issue();
        let user_id = auth.user_id();
        loading.set(true);
        spawn(async move {
            let response = match list_properties(listing.to_api_query(), user_id).await {
                Ok(page) => page,
                Err(e) => {
                    error!("Listing fetch failed: {e:#?}");
                    PropertyPage::empty()
                }
            };
            if let Some(response) = generations.peek().accept(ticket, response) {
                listing_page.set(Some(response));
                loading.set(false);
            }
        });
    });

    let navigate = Callback::new(move |listing: ListingQuery| {
        RouterLocation::new(query.peek().clone()).push_query(&listing.url_query());
    });

    // optimistic; a failure is logged and the next fetch shows the server state
    let toggle_favorite = Callback::new(move |property_id: String| {
        let mut now_favorite = None;
        if let Some(page) = listing_page.write().as_mut() {
            if let Some(property) = page.data.iter_mut().find(|p| p.id == property_id) {
                property.is_favorite = !property.is_favorite;
                now_favorite = Some(property.is_favorite);
            }
        }
        let Some(now_favorite) = now_favorite else {
            return;
        };
        let user_id = auth.user_id();
        spawn(async move {
            let result = if now_favorite {
                add_favorite(user_id, property_id.clone()).await
            } else {
                remove_favorite(user_id, property_id.clone()).await
            };
            if let Err(e) = result {
                error!("Favorite update for {property_id} failed: {e:#?}");
            }
        });
    });

    use_context_provider(move || FilterBarControl {
        schema: schema.into(),
        filter_bar: filter_bar.into(),
        dispatch,
    });
    use_context_provider(move || ListingState {
        listing: query,
        page: listing_page.into(),
        loading: loading.into(),
        navigate,
        toggle_favorite,
    });

    rsx! {
        div {
            id: "x-auction-list-root",
            style: "display: flex; flex-direction: column; width: 100%;",
            h1 {
                style: "font-size: 28px; font-weight: 500; color: #0F172A; margin: 16px 32px 0 32px;",
                "Imóveis em leilão"
            }
            FilterBarView {}
            PropertyGridView {}
        }
    }
}
