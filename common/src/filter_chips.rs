//! Removable chips describing the applied filters.
//!
//! A chip is shown for a key exactly when the encoder emits at least one
//! parameter for it, so the chips always describe the URL.

use serde::{Deserialize, Serialize};

use crate::filter_schema::{FilterDefinition, FilterKind, FilterSchema, LocationNode};
use crate::format::format_brl_compact;
use crate::query_codec::{encode_entry, format_number};
use crate::selections::{FilterValue, Selections};

/// What a chip's close button resets: a whole key, or one part of a composite range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChipRemoval {
    pub key: String,
    pub part: Option<String>,
}

impl ChipRemoval {
    pub fn key(key: impl Into<String>) -> Self {
        Self { key: key.into(), part: None }
    }

    pub fn part(key: impl Into<String>, part: impl Into<String>) -> Self {
        Self { key: key.into(), part: Some(part.into()) }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterChip {
    pub key: String,
    pub label: String,
    pub removal: ChipRemoval,
}

pub fn chips_for(applied: &Selections, schema: &FilterSchema) -> Vec<FilterChip> {
    // sort first, everything else in declaration order
    let (sorts, others): (Vec<_>, Vec<_>) = schema.iter().partition(|filter| filter.is_sort());

    let mut chips = Vec::new();
    for filter in sorts.into_iter().chain(others) {
        let Some(value) = applied.get(&filter.key) else {
            continue;
        };
        if encode_entry(filter, value).is_empty() {
            continue;
        }
        chips.extend(chips_for_filter(filter, value));
    }
    chips
}

fn chips_for_filter(filter: &FilterDefinition, value: &FilterValue) -> Vec<FilterChip> {
    let key = filter.key.clone();
    let whole = |label: String| {
        vec![FilterChip { key: key.clone(), label, removal: ChipRemoval::key(key.clone()) }]
    };
    match (&filter.kind, value) {
        (FilterKind::Range { .. }, FilterValue::Range(range)) => whole(format!(
            "{}: {} – {}",
            filter.label,
            format_brl_compact(range.min),
            format_brl_compact(range.max)
        )),
        (FilterKind::CompositeRange { bounds, parts }, FilterValue::Composite(values)) => parts
            .iter()
            .filter_map(|part| {
                let range = values.get(&part.key).filter(|range| !range.is_full(bounds))?;
                Some(FilterChip {
                    key: key.clone(),
                    label: format!("{}: {}% – {}%", part.label, format_number(range.min), format_number(range.max)),
                    removal: ChipRemoval::part(key.clone(), part.key.clone()),
                })
            })
            .collect(),
        (FilterKind::Hierarchical { tree }, FilterValue::Location(location)) => {
            let mut labels = Vec::new();
            let mut nodes = tree.as_slice();
            for (_, selected) in location.filled_levels() {
                let node = find_node(nodes, selected);
                labels.push(node.map(|node| node.label.as_str()).unwrap_or(selected).to_string());
                nodes = node.map(|node| node.children.as_slice()).unwrap_or(&[]);
            }
            whole(format!("{}: {}", filter.label, labels.join(" / ")))
        }
        (FilterKind::SingleChoice { .. } | FilterKind::MultiChoice { .. } | FilterKind::Custom, _) => {
            let labels = value
                .choice_values()
                .into_iter()
                .filter(|selected| !selected.is_empty())
                .map(|selected| filter.option_label(selected))
                .collect::<Vec<_>>();
            whole(format!("{}: {}", filter.label, labels.join(", ")))
        }
        _ => Vec::new(),
    }
}

fn find_node<'a>(nodes: &'a [LocationNode], value: &str) -> Option<&'a LocationNode> {
    nodes.iter().find(|node| node.value == value)
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use super::*;
    use crate::auction_filters::auction_filter_schema;
    use crate::query_codec::{decode, defaults, encode};
    use crate::selections::{LocationValue, RangeValue};

    fn tree() -> Vec<LocationNode> {
        vec![LocationNode {
            value: "SP".into(),
            label: "São Paulo (SP)".into(),
            children: vec![LocationNode {
                value: "Campinas".into(),
                label: "Campinas".into(),
                children: vec![],
            }],
        }]
    }

    fn schema() -> FilterSchema {
        auction_filter_schema(tree())
    }

    #[test]
    fn price_chip_reads_grouped_reais() {
        let applied = defaults(&schema()).with("price", FilterValue::Range(RangeValue::new(100_000.0, 300_000.0)));
        let chips = chips_for(&applied, &schema());
        let price = chips.iter().find(|chip| chip.key == "price").unwrap();
        assert_eq!(price.label, "Preço: R$100.000 – R$300.000");
        assert_eq!(price.removal, ChipRemoval::key("price"));
    }

    #[test]
    fn sort_chip_comes_first() {
        let applied = decode("propertyType=Casa&sort=precoSegundoLeilao:asc", &schema());
        let chips = chips_for(&applied, &schema());
        assert_eq!(chips[0].label, "Ordenação: Menor preço do segundo leilão");
        assert_eq!(chips[1].label, "Tipo: Casa");
    }

    #[test]
    fn multi_choice_chip_falls_back_to_raw_values() {
        let applied = decode("modality=vendaOnline,leilaoJudicial", &schema());
        let chips = chips_for(&applied, &schema());
        assert_eq!(chips[0].label, "Modalidade: Venda Online, leilaoJudicial");
    }

    #[test]
    fn one_chip_per_changed_discount_part() {
        let applied = decode("firstDiscountMin=10&firstDiscountMax=50", &schema());
        let chips = chips_for(&applied, &schema());
        assert_eq!(chips.len(), 1);
        assert_eq!(chips[0].label, "Primeira Praça: 10% – 50%");
        assert_eq!(chips[0].removal, ChipRemoval::part("discounts", "discount1"));
    }

    #[test]
    fn location_chip_uses_tree_labels() {
        let location = LocationValue { state: "SP".into(), city: "Campinas".into(), neighborhood: "Cambuí".into() };
        let applied = Selections::new().with("location", FilterValue::Location(location));
        let chips = chips_for(&applied, &schema());
        assert_eq!(chips[0].label, "Localização: São Paulo (SP) / Campinas / Cambuí");
    }

    #[test]
    fn defaults_only_show_the_sort_chip() {
        let chips = chips_for(&defaults(&schema()), &schema());
        assert_eq!(chips.len(), 1);
        assert_eq!(chips[0].key, "sort");
    }

    fn emitted_keys(applied: &Selections, schema: &FilterSchema) -> BTreeSet<String> {
        schema
            .iter()
            .filter(|filter| applied.get(&filter.key).is_some_and(|value| !encode_entry(filter, value).is_empty()))
            .map(|filter| filter.key.clone())
            .collect()
    }

    #[test]
    fn chip_keys_match_emitted_keys() {
        let mut discounts = BTreeMap::new();
        discounts.insert("discount1".to_string(), RangeValue::new(0.0, 100.0));
        discounts.insert("discount2".to_string(), RangeValue::new(5.0, 100.0));
        let samples = vec![
            defaults(&schema()),
            Selections::new(),
            decode("propertyType=&priceMin=0&priceMax=5000000", &schema()),
            decode("sort=semOrdem&state=SP&paymentConditions=fgts", &schema()),
            Selections::new().with("discounts", FilterValue::Composite(discounts)).with("modality", FilterValue::List(vec![])),
        ];
        for applied in samples {
            let chip_keys = chips_for(&applied, &schema()).into_iter().map(|chip| chip.key).collect::<BTreeSet<_>>();
            assert_eq!(chip_keys, emitted_keys(&applied, &schema()), "applied: {applied:?}");
            assert_eq!(chip_keys.is_empty(), encode(&applied, &schema()).is_empty());
        }
    }

    #[test]
    fn empty_multi_choice_param_shows_no_chip() {
        let applied = decode("propertyType=", &schema());
        assert!(chips_for(&applied, &schema()).is_empty());
        assert_eq!(encode(&applied, &schema()), "");
    }

    mod properties {
        use super::*;
        use proptest::collection::vec;
        use proptest::prelude::*;

        /// Values that may be blank, including ones no option knows about.
        fn choice() -> impl Strategy<Value = String> {
            prop_oneof![
                Just(String::new()),
                Just("Casa".to_string()),
                Just("vendaOnline".to_string()),
                Just("precoSegundoLeilao:asc".to_string()),
                Just("semOrdem".to_string()),
                "[a-z]{1,6}",
            ]
        }

        fn choice_value() -> impl Strategy<Value = FilterValue> {
            prop_oneof![
                choice().prop_map(FilterValue::Text),
                vec(choice(), 0..4).prop_map(FilterValue::List),
            ]
        }

        fn range() -> impl Strategy<Value = RangeValue> {
            prop_oneof![
                Just(RangeValue::new(0.0, 5_000_000.0)),
                Just(RangeValue::new(0.0, 100.0)),
                (0u32..=100, 0u32..=100).prop_map(|(a, b)| RangeValue::new(f64::from(a.min(b)), f64::from(a.max(b)))),
            ]
        }

        prop_compose! {
            fn applied()(
                sort in proptest::option::of(choice_value()),
                property_type in proptest::option::of(choice_value()),
                modality in proptest::option::of(choice_value()),
                price in proptest::option::of(range()),
                first in range(),
                second in range(),
                include_discounts in any::<bool>(),
                levels in vec(prop_oneof![Just(String::new()), Just("SP".to_string()), "[A-Z][a-z]{0,6}"], 3),
            ) -> Selections {
                let mut applied = Selections::new().with("location", FilterValue::Location(LocationValue {
                    state: levels[0].clone(),
                    city: levels[1].clone(),
                    neighborhood: levels[2].clone(),
                }));
                for (key, value) in [("sort", sort), ("propertyType", property_type), ("modality", modality)] {
                    if let Some(value) = value {
                        applied.insert(key, value);
                    }
                }
                if let Some(price) = price {
                    applied.insert("price", FilterValue::Range(price));
                }
                if include_discounts {
                    let mut parts = BTreeMap::new();
                    parts.insert("discount1".to_string(), first);
                    parts.insert("discount2".to_string(), second);
                    applied.insert("discounts", FilterValue::Composite(parts));
                }
                applied
            }
        }

        proptest! {
            #[test]
            fn chips_describe_exactly_the_emitted_keys(applied in applied()) {
                let schema = schema();
                let chips = chips_for(&applied, &schema);
                let chip_keys = chips.iter().map(|chip| chip.key.clone()).collect::<BTreeSet<_>>();
                prop_assert_eq!(&chip_keys, &emitted_keys(&applied, &schema));
                prop_assert_eq!(chip_keys.is_empty(), encode(&applied, &schema).is_empty());
                for chip in &chips {
                    prop_assert!(!chip.label.trim_end().ends_with(':'), "blank chip {:?}", chip);
                }
            }

            #[test]
            fn chips_survive_a_trip_through_the_url(applied in applied()) {
                let schema = schema();
                let decoded = decode(&encode(&applied, &schema), &schema);
                let keys = |selections: &Selections| {
                    chips_for(selections, &schema).into_iter().map(|chip| chip.key).collect::<BTreeSet<_>>()
                };
                prop_assert_eq!(keys(&decoded), keys(&applied));
            }
        }
    }
}
