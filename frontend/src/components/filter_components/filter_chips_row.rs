use common::filter_bar::FilterBarEvent;
use common::filter_chips::{chips_for, FilterChip};
use common::filter_schema::FilterSchema;
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_navigation_icons::MdClose;
use dioxus_free_icons::Icon;

use crate::pages::auction_list_page::FilterBarControl;

/// One removable chip per applied, non-neutral filter.
#[component]
pub fn FilterChipsRow(schema: FilterSchema) -> Element {
    let control = use_context::<FilterBarControl>();
    let chips = control
        .filter_bar
        .read()
        .applied()
        .map(|applied| chips_for(applied, &schema))
        .unwrap_or_default();

    rsx! {
        div {
            id: "x-filter-chips-row",
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                flex: 1;
                gap: 8px;
                min-height: 40px;
                align-items: center;
                padding: 4px 8px;
                border: 1px solid #E5E7EB;
                border-radius: 8px;
                background: rgba(255,255,255,0.5);
            ",
            for chip in chips {
                FilterChipView { key: "{chip.label}", chip }
            }
        }
    }
}

#[component]
fn FilterChipView(chip: FilterChip) -> Element {
    let control = use_context::<FilterBarControl>();
    let removal = chip.removal.clone();
    rsx! {
        div {
            style: "
                display: flex;
                align-items: center;
                gap: 4px;
                height: 30px;
                padding: 0 6px 0 12px;
                font-size: 14px;
                color: #1E3A8A;
                background: #EEF2FF;
                border: 1px solid #C7D2FE;
                border-radius: 1000px;
                white-space: nowrap;
            ",
            "{chip.label}"
            button {
                style: "display: flex; border: none; background: none; padding: 2px; cursor: pointer; color: #1E3A8A;",
                "aria-label": "Remover filtro",
                onclick: move |_| control.dispatch.call(FilterBarEvent::ClearOne(removal.clone())),
                Icon { icon: MdClose, style: "width: 16px; height: 16px;" }
            }
        }
    }
}
