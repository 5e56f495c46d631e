//! Free-text search and the favorites-only switch above the grid.

use common::fetch_generation::FetchGenerations;
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdFavorite, MdSearch};
use dioxus_free_icons::Icon;
use gloo_timers::future::TimeoutFuture;

use crate::pages::auction_list_page::ListingState;

const SEARCH_DEBOUNCE_MS: u32 = 400;

#[component]
pub fn SearchBox() -> Element {
    let state = use_context::<ListingState>();
    let mut search_text = use_signal(|| state.listing.peek().search.clone());
    let mut keystrokes = use_signal(FetchGenerations::default);

    // back/forward navigation does not remount the page
    let url_search = use_memo(move || state.listing.read().search.clone());
    use_effect(move || {
        search_text.set(url_search());
    });

    let search_oninput = move |event: Event<FormData>| {
        let text = event.value();
        search_text.set(text.clone());
        let ticket = keystrokes.write().issue();
        spawn(async move {
            TimeoutFuture::new(SEARCH_DEBOUNCE_MS).await;
            if !keystrokes.peek().is_current(ticket) {
                return;
            }
            let listing = state.listing.peek().clone();
            if listing.search != text.trim() {
                state.navigate.call(listing.with_search(text.trim()));
            }
        });
    };

    rsx! {
        div {
            id: "x-listing-search-box",
            style: "
                display: flex;
                align-items: center;
                gap: 10px;
                background-color: white;
                border-radius: 9999px;
                padding: 10px 14px;
                height: 42px;
                width: 420px;
                max-width: 100%;
                color: #111827;
                border: 1px solid rgba(101, 101, 101, 0.5);
                box-sizing: border-box;
            ",
            Icon { icon: MdSearch, style: "width: 20px; height: 20px; color: #6B7280;" }
            input {
                r#type: "text",
                placeholder: "Buscar por identificação, tipo, cidade ou bairro",
                style: "
                    flex: 1;
                    border: none;
                    outline: none;
                    background: transparent;
                    color: #111827;
                    font-size: 15px;
                ",
                value: "{search_text}",
                oninput: search_oninput,
            }
        }
    }
}

#[component]
pub fn FavoritesToggle() -> Element {
    let state = use_context::<ListingState>();
    let only_favorites = state.listing.read().show_only_favorites;
    let (border, color) = if only_favorites { ("#E5484D", "#E5484D") } else { ("#D1D5DB", "#374151") };
    rsx! {
        button {
            style: "
                display: flex;
                align-items: center;
                gap: 6px;
                height: 40px;
                padding: 0 14px;
                font-size: 15px;
                color: {color};
                background: white;
                border: 1px solid {border};
                border-radius: 9999px;
                cursor: pointer;
            ",
            onclick: move |_| {
                let listing = state.listing.peek().clone();
                state.navigate.call(listing.with_show_only_favorites(!only_favorites));
            },
            Icon { icon: MdFavorite, style: "width: 18px; height: 18px;" }
            "Somente favoritos"
        }
    }
}
