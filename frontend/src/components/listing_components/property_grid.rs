//! Result grid for the current listing page.

use dioxus::prelude::*;

use crate::components::listing_components::pagination::PaginationControls;
use crate::components::listing_components::property_card::PropertyCard;
use crate::components::listing_components::search_box::{FavoritesToggle, SearchBox};
use crate::components::suspend_boundary::LoadingIndicator;
use crate::pages::auction_list_page::ListingState;

#[component]
pub fn PropertyGridView() -> Element {
    rsx! {
        div {
            id: "x-property-grid-wrapper",
            style: "
                display: flex;
                flex-direction: column;
                gap: 16px;
                padding: 8px 32px 32px 32px;
            ",
            div {
                style: "display: flex; flex-direction: row; flex-wrap: wrap; align-items: center; gap: 16px;",
                SearchBox {}
                FavoritesToggle {}
                div { style: "flex-grow: 1;" }
                ResultCount {}
            }
            PropertyResults {}
            PaginationControls {}
        }
    }
}

#[component]
fn ResultCount() -> Element {
    let state = use_context::<ListingState>();
    let total = state.page.read().as_ref().map(|page| page.meta.total);
    let count_txt = match total {
        Some(1) => "1 imóvel encontrado".to_string(),
        Some(total) => format!("{total} imóveis encontrados"),
        None => String::new(),
    };
    rsx! {
        h2 {
            style: "font-size: 18px; font-weight: 400; color: rgb(75, 87, 112); margin: 0;",
            "{count_txt}"
        }
    }
}

#[component]
fn PropertyResults() -> Element {
    let state = use_context::<ListingState>();
    let page = state.page.read();
    let Some(page) = page.as_ref() else {
        return rsx! {
            div {
                style: "display: flex; justify-content: center; width: 100%;",
                LoadingIndicator {}
            }
        };
    };

    if page.data.is_empty() {
        return rsx! {
            div {
                style: "
                    padding: 48px;
                    text-align: center;
                    font-size: 18px;
                    color: #6B7280;
                    background: white;
                    border: 1px dashed #D1D5DB;
                    border-radius: 12px;
                ",
                "Nenhum imóvel encontrado para os filtros selecionados."
            }
        };
    }

    let opacity = if *state.loading.read() { "0.5" } else { "1" };
    rsx! {
        div {
            class: "x-property-grid",
            style: "opacity: {opacity};",
            for property in page.data.iter().cloned() {
                PropertyCard { key: "{property.id}", property }
            }
        }
    }
}
