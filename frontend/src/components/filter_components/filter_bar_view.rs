//! "Filtrar" popover with one tab per filter, the chip row and "Limpar filtros".

use common::filter_bar::FilterBarEvent;
use common::filter_schema::{FilterDefinition, FilterSchema};
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::MdDelete;
use dioxus_free_icons::icons::md_image_icons::MdTune;
use dioxus_free_icons::Icon;

use crate::components::filter_components::filter_chips_row::FilterChipsRow;
use crate::components::filter_components::filter_controls::FilterControl;
use crate::pages::auction_list_page::FilterBarControl;

#[component]
pub fn FilterBarView() -> Element {
    let control = use_context::<FilterBarControl>();
    let mut is_open = use_signal(|| false);

    let Some(schema) = control.schema.read().clone() else {
        return rsx! { FilterBarPlaceholder {} };
    };
    if !control.filter_bar.read().is_ready() {
        return rsx! { FilterBarPlaceholder {} };
    }
    let has_active_filters = control.filter_bar.read().has_active_filters(&schema);

    // closing without "Filtrar" drops the draft
    let close_popover = Callback::new(move |apply: bool| {
        let event = if apply { FilterBarEvent::Apply } else { FilterBarEvent::DiscardDraft };
        control.dispatch.call(event);
        is_open.set(false);
    });

    rsx! {
        div {
            id: "x-filter-bar",
            style: "
                display: flex;
                flex-direction: row;
                flex-wrap: wrap;
                align-items: center;
                gap: 8px;
                padding: 12px 32px;
            ",

            div {
                style: "position: relative;",
                button {
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 6px;
                        height: 40px;
                        padding: 0 16px;
                        font-size: 16px;
                        color: white;
                        background: #1D4ED8;
                        border: none;
                        border-radius: 8px;
                        cursor: pointer;
                    ",
                    onclick: move |_| {
                        if is_open() {
                            close_popover.call(false);
                        } else {
                            is_open.set(true);
                        }
                    },
                    Icon { icon: MdTune, style: "width: 20px; height: 20px;" }
                    "Filtrar"
                }
                if is_open() {
                    FilterPopover {
                        schema: schema.clone(),
                        on_close: close_popover,
                    }
                    div {
                        style: "
                            position: fixed;
                            top: 0px;
                            left: 0px;
                            z-index: 999;
                            background-color: rgba(0,0,0,0.1);
                            width: 100%;
                            height: 100%;
                        ",
                        onclick: move |_| close_popover.call(false),
                    }
                }
            }

            FilterChipsRow { schema: schema.clone() }

            if has_active_filters {
                button {
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 4px;
                        height: 36px;
                        padding: 0 10px;
                        font-size: 14px;
                        color: #374151;
                        background: none;
                        border: none;
                        cursor: pointer;
                    ",
                    "aria-label": "Limpar filtros",
                    onclick: move |_| control.dispatch.call(FilterBarEvent::ClearAll),
                    Icon { icon: MdDelete, style: "width: 18px; height: 18px;" }
                    "Limpar filtros"
                }
            }
        }
    }
}

#[component]
fn FilterBarPlaceholder() -> Element {
    rsx! {
        div {
            style: "padding: 12px 32px; height: 40px; color: #9CA3AF; font-size: 15px;",
            "Carregando filtros..."
        }
    }
}

#[component]
fn FilterPopover(schema: FilterSchema, on_close: EventHandler<bool>) -> Element {
    let control = use_context::<FilterBarControl>();
    let first_key = schema.filters().first().map(|f| f.key.clone()).unwrap_or_default();
    let mut active_tab = use_signal(move || first_key);

    let active_filter: Option<FilterDefinition> = schema.get(&active_tab.read()).cloned();

    rsx! {
        div {
            style: "
                position: absolute;
                top: 48px;
                left: 0px;
                display: flex;
                flex-direction: column;
                width: 640px;
                max-width: calc(100vw - 40px);
                max-height: calc(100vh - 140px);
                background-color: white;
                border: 1px solid rgba(0,0,0,0.2);
                border-radius: 10px;
                padding: 16px;
                box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.1);
                z-index: 1000;
            ",

            div {
                style: "display: flex; flex-direction: row; gap: 16px; min-height: 0; flex: 1;",

                // tabs
                div {
                    style: "display: flex; flex-direction: column; gap: 2px; width: 180px; flex-shrink: 0;",
                    for filter in schema.filters().iter().cloned() {
                        FilterTabButton {
                            key: "{filter.key}",
                            active_tab,
                            filter_key: filter.key,
                            label: filter.label,
                        }
                    }
                }

                // active panel
                div {
                    style: "flex: 1; overflow-y: auto; padding: 4px 8px;",
                    if let Some(filter) = active_filter {
                        div {
                            style: "font-size: 16px; font-weight: 600; margin-bottom: 12px;",
                            "{filter.title}"
                        }
                        FilterControl { key: "{filter.key}", filter }
                    }
                }
            }

            div {
                style: "display: flex; flex-direction: row; justify-content: flex-end; gap: 8px; margin-top: 16px;",
                PopoverButton {
                    primary: false,
                    onclick: move |_| control.dispatch.call(FilterBarEvent::ResetDraft { key: active_tab.read().clone() }),
                    "Limpar"
                }
                PopoverButton {
                    primary: false,
                    onclick: move |_| on_close.call(false),
                    "Cancelar"
                }
                PopoverButton {
                    primary: true,
                    onclick: move |_| on_close.call(true),
                    "Filtrar"
                }
            }
        }
    }
}

#[component]
fn FilterTabButton(mut active_tab: Signal<String>, filter_key: String, label: String) -> Element {
    let is_active = *active_tab.read() == filter_key;
    let (background, color) = if is_active { ("#EEF2FF", "#1D4ED8") } else { ("transparent", "#374151") };
    rsx! {
        button {
            class: "x-filter-option",
            style: "
                text-align: left;
                padding: 8px 10px;
                font-size: 15px;
                border: none;
                border-radius: 6px;
                background: {background};
                color: {color};
                cursor: pointer;
            ",
            onclick: move |_| active_tab.set(filter_key.clone()),
            "{label}"
        }
    }
}

#[component]
fn PopoverButton(primary: bool, onclick: EventHandler<MouseEvent>, children: Element) -> Element {
    let style = if primary {
        "color: white; background: #1D4ED8; border: 1px solid #1D4ED8;"
    } else {
        "color: #111827; background: white; border: 1px solid #D1D5DB;"
    };
    rsx! {
        button {
            style: "height: 36px; padding: 0 14px; font-size: 15px; border-radius: 8px; cursor: pointer; {style}",
            onclick: move |e| onclick.call(e),
            {children}
        }
    }
}
