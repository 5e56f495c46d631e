//! Previous/next and numbered page buttons under the grid.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_navigation_icons::{MdArrowBack, MdArrowForward};
use dioxus_free_icons::{Icon, IconShape};

use crate::pages::auction_list_page::ListingState;

const PAGE_WINDOW: u64 = 5;

/// Up to `PAGE_WINDOW` page numbers around `current`, clamped to `1..=pages`.
fn page_window(current: u64, pages: u64) -> Vec<u64> {
    if pages == 0 {
        return Vec::new();
    }
    let half = PAGE_WINDOW / 2;
    let start = current.saturating_sub(half).max(1).min(pages.saturating_sub(PAGE_WINDOW - 1).max(1));
    let end = (start + PAGE_WINDOW - 1).min(pages);
    (start..=end).collect()
}

#[component]
pub fn PaginationControls() -> Element {
    let state = use_context::<ListingState>();
    let current = state.listing.read().page;
    let pages = state.page.read().as_ref().map(|page| page.meta.pages).unwrap_or(0);
    if pages <= 1 {
        return rsx! {};
    }

    let go_to = move |page: u64| {
        let listing = state.listing.peek().clone();
        state.navigate.call(listing.with_page(page));
    };

    rsx! {
        div {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                justify-content: center;
                gap: 8px;
            ",
            NavigationButton {
                icon: MdArrowBack,
                label: "Página anterior",
                disabled: current <= 1,
                onclick: move |_| go_to(current - 1),
            }
            for page in page_window(current, pages) {
                PageNumberButton {
                    key: "{page}",
                    page,
                    is_current: page == current,
                    onclick: move |_| go_to(page),
                }
            }
            NavigationButton {
                icon: MdArrowForward,
                label: "Próxima página",
                disabled: current >= pages,
                onclick: move |_| go_to(current + 1),
            }
            span {
                style: "margin-left: 12px; font-size: 14px; color: #6B7280;",
                "Página {current} de {pages}"
            }
        }
    }
}

#[component]
fn PageNumberButton(page: u64, is_current: bool, onclick: EventHandler<MouseEvent>) -> Element {
    let (background, color) = if is_current { ("#1D4ED8", "white") } else { ("white", "#111827") };
    rsx! {
        button {
            style: "
                min-width: 36px;
                height: 36px;
                font-size: 15px;
                border: 1px solid #D1D5DB;
                border-radius: 8px;
                background: {background};
                color: {color};
                cursor: pointer;
            ",
            onclick: move |e| onclick.call(e),
            "{page}"
        }
    }
}

#[component]
fn NavigationButton<T: IconShape + Clone + PartialEq + 'static>(
    icon: T,
    label: String,
    disabled: bool,
    onclick: EventHandler<MouseEvent>,
) -> Element {
    let color = if disabled { "#D1D5DB" } else { "#111827" };
    rsx! {
        button {
            style: "
                display: flex;
                align-items: center;
                justify-content: center;
                width: 36px;
                height: 36px;
                border: 1px solid #D1D5DB;
                border-radius: 8px;
                background: white;
                cursor: pointer;
            ",
            title: "{label}",
            disabled,
            onclick: move |e| onclick.call(e),
            Icon { icon, style: "width: 20px; height: 20px; color: {color};" }
        }
    }
}
