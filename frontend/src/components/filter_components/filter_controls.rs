//! Draft editors, one per filter kind. Every change goes through
//! `FilterBarEvent::Edit`; nothing here touches the applied selections.

use std::collections::BTreeMap;

use common::filter_bar::FilterBarEvent;
use common::filter_schema::{ChoiceOption, CompositePart, FilterDefinition, FilterKind, LocationNode, RangeBounds};
use common::format::{format_brl_compact, format_percent};
use common::selections::{FilterValue, LocationValue, RangeValue, LOCATION_LEVELS};
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_toggle_icons::{MdCheckBox, MdCheckBoxOutlineBlank, MdRadioButtonChecked, MdRadioButtonUnchecked};
use dioxus_free_icons::Icon;

use crate::components::auth_form::INPUT_STYLE;
use crate::pages::auction_list_page::FilterBarControl;

fn draft_value(control: &FilterBarControl, key: &str) -> Option<FilterValue> {
    control.filter_bar.read().draft().and_then(|draft| draft.get(key).cloned())
}

fn edit(control: &FilterBarControl, key: &str, value: FilterValue) {
    control.dispatch.call(FilterBarEvent::Edit { key: key.to_string(), value });
}

#[component]
pub fn FilterControl(filter: FilterDefinition) -> Element {
    match filter.kind.clone() {
        FilterKind::SingleChoice { options } => rsx! {
            ChoiceList { filter_key: filter.key, options, multiple: false }
        },
        FilterKind::MultiChoice { options } => rsx! {
            ChoiceList { filter_key: filter.key, options, multiple: true }
        },
        FilterKind::Range { bounds } => rsx! {
            PriceRangeControl { filter_key: filter.key, bounds }
        },
        FilterKind::CompositeRange { bounds, parts } => rsx! {
            for part in parts {
                CompositePartControl { key: "{part.key}", filter_key: filter.key.clone(), bounds, part }
            }
        },
        FilterKind::Hierarchical { tree } => rsx! {
            LocationControl { filter_key: filter.key, tree }
        },
        FilterKind::Custom => rsx! {
            CustomTextControl { filter_key: filter.key }
        },
    }
}

#[component]
fn ChoiceList(filter_key: String, options: Vec<ChoiceOption>, multiple: bool) -> Element {
    let control = use_context::<FilterBarControl>();
    let selected: Vec<String> = draft_value(&control, &filter_key)
        .map(|value| value.choice_values().into_iter().map(str::to_string).collect())
        .unwrap_or_default();

    let items = options
        .into_iter()
        .map(|option| {
            let checked = selected.contains(&option.value);
            (option, checked)
        })
        .collect::<Vec<_>>();

    rsx! {
        ul {
            style: "list-style: none; padding: 0; margin: 0;",
            for (option, checked) in items {
                li {
                    key: "{option.value}",
                    ChoiceItem {
                        filter_key: filter_key.clone(),
                        option,
                        checked,
                        multiple,
                        selected: selected.clone(),
                    }
                }
            }
        }
    }
}

#[component]
fn ChoiceItem(filter_key: String, option: ChoiceOption, checked: bool, multiple: bool, selected: Vec<String>) -> Element {
    let control = use_context::<FilterBarControl>();
    let label = option.label.clone();

    let on_toggle = move |_| {
        let value = if multiple {
            let mut values = selected.clone();
            if checked {
                values.retain(|v| v != &option.value);
            } else {
                values.push(option.value.clone());
            }
            FilterValue::List(values)
        } else {
            FilterValue::Text(option.value.clone())
        };
        edit(&control, &filter_key, value);
    };

    rsx! {
        div {
            class: "x-filter-option",
            style: "
                display: flex;
                flex-direction: row;
                gap: 10px;
                cursor: pointer;
                padding: 4px;
                margin: 2px;
                align-items: center;
                border-radius: 6px;
            ",
            onclick: on_toggle,
            {match (multiple, checked) {
                (true, true) => rsx! { Icon { icon: MdCheckBox, style: "width: 22px; height: 22px; color: #1D4ED8; flex-shrink: 0;" } },
                (true, false) => rsx! { Icon { icon: MdCheckBoxOutlineBlank, style: "width: 22px; height: 22px; color: #6B7280; flex-shrink: 0;" } },
                (false, true) => rsx! { Icon { icon: MdRadioButtonChecked, style: "width: 22px; height: 22px; color: #1D4ED8; flex-shrink: 0;" } },
                (false, false) => rsx! { Icon { icon: MdRadioButtonUnchecked, style: "width: 22px; height: 22px; color: #6B7280; flex-shrink: 0;" } },
            }}
            div {
                style: "font-size: 15px; line-height: 22px; color: #111827;",
                "{label}"
            }
        }
    }
}

#[component]
fn PriceRangeControl(filter_key: String, bounds: RangeBounds) -> Element {
    let control = use_context::<FilterBarControl>();
    let value = draft_value(&control, &filter_key)
        .and_then(|value| value.as_range().copied())
        .unwrap_or(RangeValue::full(&bounds));

    rsx! {
        RangeSliders {
            bounds,
            value,
            currency: true,
            on_change: move |range: RangeValue| edit(&control, &filter_key, FilterValue::Range(range)),
        }
    }
}

#[component]
fn CompositePartControl(filter_key: String, bounds: RangeBounds, part: CompositePart) -> Element {
    let control = use_context::<FilterBarControl>();
    let parts: BTreeMap<String, RangeValue> = draft_value(&control, &filter_key)
        .and_then(|value| value.as_composite().cloned())
        .unwrap_or_default();
    let value = parts.get(&part.key).copied().unwrap_or(RangeValue::full(&bounds));

    let part_key = part.key.clone();
    let on_change = move |range: RangeValue| {
        let mut parts = parts.clone();
        parts.insert(part_key.clone(), range);
        edit(&control, &filter_key, FilterValue::Composite(parts));
    };

    rsx! {
        div {
            style: "margin-bottom: 18px;",
            div { style: "font-size: 14px; font-weight: 500; color: #4B5563; margin-bottom: 4px;", "{part.label}" }
            RangeSliders {
                bounds,
                value,
                currency: false,
                on_change,
            }
        }
    }
}

/// Two sliders for the ends of a range. The ends never cross.
#[component]
fn RangeSliders(bounds: RangeBounds, value: RangeValue, currency: bool, on_change: EventHandler<RangeValue>) -> Element {
    let format_value = |v: f64| if currency { format_brl_compact(v) } else { format_percent(v) };
    // NaN from a malformed URL shows as the open end
    let min = if value.min.is_finite() { value.min } else { bounds.min };
    let max = if value.max.is_finite() { value.max } else { bounds.max };

    let min_label = if min <= bounds.min { "Sem valor mínimo".to_string() } else { format_value(min) };
    let max_label = if max >= bounds.max { "Sem limite definido".to_string() } else { format_value(max) };

    let slider_style = "width: 100%; accent-color: #1D4ED8;";
    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 6px; width: 100%;",
            div {
                style: "display: flex; justify-content: space-between; font-size: 14px; color: #4B5563;",
                span { "{min_label}" }
                span { "{max_label}" }
            }
            input {
                r#type: "range",
                style: slider_style,
                min: "{bounds.min}",
                max: "{bounds.max}",
                step: "{bounds.step}",
                value: "{min}",
                oninput: move |event: Event<FormData>| {
                    if let Ok(new_min) = event.value().parse::<f64>() {
                        on_change.call(RangeValue::new(new_min, max.max(new_min)));
                    }
                },
            }
            input {
                r#type: "range",
                style: slider_style,
                min: "{bounds.min}",
                max: "{bounds.max}",
                step: "{bounds.step}",
                value: "{max}",
                oninput: move |event: Event<FormData>| {
                    if let Ok(new_max) = event.value().parse::<f64>() {
                        on_change.call(RangeValue::new(min.min(new_max), new_max));
                    }
                },
            }
        }
    }
}

fn children_of<'a>(nodes: &'a [LocationNode], value: &str) -> &'a [LocationNode] {
    nodes.iter().find(|node| node.value == value).map(|node| node.children.as_slice()).unwrap_or(&[])
}

#[component]
fn LocationControl(filter_key: String, tree: Vec<LocationNode>) -> Element {
    let control = use_context::<FilterBarControl>();
    let location = draft_value(&control, &filter_key)
        .and_then(|value| value.as_location().cloned())
        .unwrap_or_default();

    let cities = children_of(&tree, &location.state).to_vec();
    let neighborhoods = children_of(&cities, &location.city).to_vec();
    let [state_level, city_level, neighborhood_level] = LOCATION_LEVELS;

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 12px;",
            LocationSelect {
                filter_key: filter_key.clone(),
                level: state_level,
                label: "Estado",
                nodes: tree,
                location: location.clone(),
            }
            LocationSelect {
                filter_key: filter_key.clone(),
                level: city_level,
                label: "Cidade",
                nodes: cities,
                location: location.clone(),
            }
            LocationSelect {
                filter_key,
                level: neighborhood_level,
                label: "Bairro",
                nodes: neighborhoods,
                location,
            }
        }
    }
}

#[component]
fn LocationSelect(filter_key: String, level: &'static str, label: &'static str, nodes: Vec<LocationNode>, location: LocationValue) -> Element {
    let control = use_context::<FilterBarControl>();
    let current = location.level(level).unwrap_or_default().to_string();
    let disabled = nodes.is_empty() && current.is_empty();

    let on_change = move |event: Event<FormData>| {
        let mut location = location.clone();
        location.set_level(level, event.value());
        // a new parent invalidates everything below it
        let below = LOCATION_LEVELS.iter().skip_while(|l| **l != level).skip(1);
        for child in below {
            location.set_level(child, String::new());
        }
        edit(&control, &filter_key, FilterValue::Location(location));
    };

    rsx! {
        label {
            style: "display: flex; flex-direction: column; gap: 4px; font-size: 14px; color: #4B5563;",
            "{label}"
            select {
                style: INPUT_STYLE,
                disabled,
                onchange: on_change,
                option { value: "", selected: current.is_empty(), "Todos" }
                for node in nodes {
                    option {
                        key: "{node.value}",
                        value: "{node.value}",
                        selected: node.value == current,
                        "{node.label}"
                    }
                }
            }
        }
    }
}

#[component]
fn CustomTextControl(filter_key: String) -> Element {
    let control = use_context::<FilterBarControl>();
    let text = draft_value(&control, &filter_key)
        .and_then(|value| value.as_text().map(str::to_string))
        .unwrap_or_default();
    rsx! {
        input {
            r#type: "text",
            style: INPUT_STYLE,
            value: "{text}",
            oninput: move |event: Event<FormData>| edit(&control, &filter_key, FilterValue::Text(event.value())),
        }
    }
}
