use dioxus::prelude::*;
use dioxus_free_icons::icons::md_navigation_icons::MdChevronRight;
use dioxus_free_icons::Icon;

use crate::routes::Route;

/// "Início > {current}" trail shown on top of every page but the home page.
#[component]
pub fn Breadcrumb(current: String) -> Element {
    rsx! {
        nav {
            style: "
                display: flex;
                flex-direction: row;
                align-items: center;
                gap: 6px;
                padding: 16px 32px 0 32px;
                font-size: 14px;
                color: #6B7280;
            ",
            Link {
                to: Route::HomePage {},
                style: "color: #1D4ED8; text-decoration: none;",
                "Início"
            }
            Icon { icon: MdChevronRight, style: "width: 16px; height: 16px;" }
            span { style: "color: #111827;", "{current}" }
        }
    }
}
