//! Selections ↔ query string codec.
//!
//! Everything here is driven by the schema: each definition kind decides which
//! parameters it owns, so adding a filter never touches this module.

use std::collections::{BTreeMap, HashMap};

use percent_encoding::percent_decode_str;
use tracing::debug;

use crate::filter_schema::{FilterDefinition, FilterKind, FilterSchema, RangeBounds, SortSpec};
use crate::selections::{FilterValue, LocationValue, RangeValue, Selections, LOCATION_LEVELS};

/// Selections every filter starts from. Values are owned copies, so mutating
/// one snapshot never leaks into another.
pub fn defaults(schema: &FilterSchema) -> Selections {
    schema
        .iter()
        .filter_map(|filter| Some((filter.key.clone(), filter.default_value.clone()?)))
        .collect()
}

/// Default for one key, if the schema declares it.
pub fn default_for(schema: &FilterSchema, key: &str) -> Option<FilterValue> {
    schema.get(key)?.default_value.clone()
}

/// Serializes `selections` in schema declaration order.
///
/// Keys at a neutral default (empty list, full bounds, empty location) emit
/// nothing. The form-urlencoded output is percent-decoded afterwards so URLs
/// stay readable: `propertyType=Casa,Imóvel+rural`.
pub fn encode(selections: &Selections, schema: &FilterSchema) -> String {
    let mut pairs = Vec::new();
    for filter in schema.iter() {
        if let Some(value) = selections.get(&filter.key) {
            pairs.extend(encode_entry(filter, value));
        }
    }
    serialize_pairs(&pairs)
}

/// Parameters one filter value contributes. Empty when the value is at a
/// neutral default or does not fit the definition.
pub fn encode_entry(filter: &FilterDefinition, value: &FilterValue) -> Vec<(String, String)> {
    let key = filter.key.as_str();
    match (&filter.kind, value) {
        (FilterKind::MultiChoice { .. }, FilterValue::List(items)) => {
            let joined = items.iter().filter(|item| !item.is_empty()).map(String::as_str).collect::<Vec<_>>().join(",");
            if joined.is_empty() { Vec::new() } else { vec![(key.to_string(), joined)] }
        }
        (FilterKind::SingleChoice { .. }, FilterValue::Text(_) | FilterValue::List(_)) => value
            .choice_values()
            .into_iter()
            .filter_map(|selected| single_choice_param(filter, selected))
            .map(|param| (key.to_string(), param))
            .collect(),
        (FilterKind::Range { bounds }, FilterValue::Range(range)) if !range.is_full(bounds) => {
            range_params(key, range)
        }
        (FilterKind::CompositeRange { bounds, parts }, FilterValue::Composite(values)) => parts
            .iter()
            .filter_map(|part| values.get(&part.key).filter(|range| !range.is_full(bounds)).map(|range| (part, range)))
            .flat_map(|(part, range)| range_params(&part.param_prefix, range))
            .collect(),
        (FilterKind::Hierarchical { .. }, FilterValue::Location(location)) => location
            .filled_levels()
            .into_iter()
            .map(|(level, value)| (level.to_string(), value.to_string()))
            .collect(),
        (FilterKind::Custom, FilterValue::Text(text)) if !text.is_empty() => vec![(key.to_string(), text.clone())],
        _ => Vec::new(),
    }
}

fn single_choice_param(filter: &FilterDefinition, selected: &str) -> Option<String> {
    if let Some(option) = filter.option(selected) {
        return Some(match &option.sort {
            Some(sort) => sort.to_string(),
            None => option.value.clone(),
        });
    }
    if filter.is_sort() {
        // value from another schema version: keep it only if it already reads `field:order`
        let (field, order) = selected.split_once(':')?;
        if field.is_empty() || order.is_empty() {
            return None;
        }
        debug!("sort value `{selected}` has no option, passing it through");
        return Some(format!("{field}:{order}"));
    }
    (!selected.is_empty()).then(|| selected.to_string())
}

fn range_params(prefix: &str, range: &RangeValue) -> Vec<(String, String)> {
    vec![
        (format!("{prefix}Min"), format_number(range.min)),
        (format!("{prefix}Max"), format_number(range.max)),
    ]
}

/// Plain numeric literal, no grouping or locale.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // also folds -0
        return "0".to_string();
    }
    value.to_string()
}

/// Number parsing with the lenient rules the URL has always used: blank is
/// zero, garbage is NaN.
pub fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Form-urlencodes `pairs`, then percent-decodes the result.
pub fn serialize_pairs(pairs: &[(String, String)]) -> String {
    let serialized = match serde_urlencoded::to_string(pairs) {
        Ok(serialized) => serialized,
        Err(e) => {
            debug!("could not serialize query pairs: {e}");
            return String::new();
        }
    };
    percent_decode_str(&serialized).decode_utf8_lossy().into_owned()
}

/// Splits a query string into ordered pairs. A leading `?` is ignored and
/// repeated keys are kept.
pub fn parse_pairs(query: &str) -> Vec<(String, String)> {
    let query = query.strip_prefix('?').unwrap_or(query);
    if query.is_empty() {
        return Vec::new();
    }
    match serde_urlencoded::from_str::<Vec<(String, String)>>(query) {
        Ok(pairs) => pairs,
        Err(e) => {
            debug!("could not parse query `{query}`: {e}");
            Vec::new()
        }
    }
}

/// Where a query parameter lands in the selections.
#[derive(Debug, Clone)]
enum ParamTarget<'a> {
    List { key: &'a str },
    RangeMin { key: &'a str, bounds: RangeBounds },
    RangeMax { key: &'a str, bounds: RangeBounds },
    PartMin { filter: &'a FilterDefinition, part: &'a str },
    PartMax { filter: &'a FilterDefinition, part: &'a str },
    Level { key: &'a str, level: &'static str },
    /// Definition keys of structured kinds; a bare `price=...` means nothing.
    Ignored,
}

fn param_table(schema: &FilterSchema) -> HashMap<String, ParamTarget<'_>> {
    let mut table = HashMap::new();
    for filter in schema.iter() {
        let key = filter.key.as_str();
        match &filter.kind {
            FilterKind::MultiChoice { .. } => {
                table.insert(key.to_string(), ParamTarget::List { key });
            }
            FilterKind::Range { bounds } => {
                table.insert(format!("{key}Min"), ParamTarget::RangeMin { key, bounds: *bounds });
                table.insert(format!("{key}Max"), ParamTarget::RangeMax { key, bounds: *bounds });
                table.insert(key.to_string(), ParamTarget::Ignored);
            }
            FilterKind::CompositeRange { parts, .. } => {
                for part in parts {
                    let prefix = &part.param_prefix;
                    table.insert(format!("{prefix}Min"), ParamTarget::PartMin { filter, part: &part.key });
                    table.insert(format!("{prefix}Max"), ParamTarget::PartMax { filter, part: &part.key });
                }
                table.insert(key.to_string(), ParamTarget::Ignored);
            }
            FilterKind::Hierarchical { .. } => {
                for level in LOCATION_LEVELS {
                    table.insert(level.to_string(), ParamTarget::Level { key, level });
                }
                table.insert(key.to_string(), ParamTarget::Ignored);
            }
            // single-choice and custom keys fall through to the verbatim rule
            FilterKind::SingleChoice { .. } | FilterKind::Custom => {}
        }
    }
    table
}

/// Whether any parameter of `query` is owned by a filter of `schema`.
pub fn has_filter_params(query: &str, schema: &FilterSchema) -> bool {
    let table = param_table(schema);
    parse_pairs(query).iter().any(|(name, _)| {
        table.get(name).is_some_and(|target| !matches!(target, ParamTarget::Ignored)) || {
            schema
                .get(name)
                .is_some_and(|filter| matches!(filter.kind, FilterKind::SingleChoice { .. } | FilterKind::Custom))
        }
    })
}

/// Rebuilds selections from a query string.
///
/// Composite ranges always come back fully populated: any part or half the
/// query does not mention is filled from the bounds.
pub fn decode(query: &str, schema: &FilterSchema) -> Selections {
    let table = param_table(schema);
    let mut selections = Selections::new();

    for (name, value) in parse_pairs(query) {
        match table.get(&name) {
            Some(ParamTarget::List { key }) => {
                selections.insert(*key, FilterValue::List(split_list(&value)));
            }
            Some(ParamTarget::RangeMin { key, bounds }) => {
                update_range(&mut selections, key, bounds, |range| range.min = parse_number(&value));
            }
            Some(ParamTarget::RangeMax { key, bounds }) => {
                update_range(&mut selections, key, bounds, |range| range.max = parse_number(&value));
            }
            Some(ParamTarget::PartMin { filter, part }) => {
                if let Some(range) = part_entry(&mut selections, filter, part) {
                    range.min = parse_number(&value);
                }
            }
            Some(ParamTarget::PartMax { filter, part }) => {
                if let Some(range) = part_entry(&mut selections, filter, part) {
                    range.max = parse_number(&value);
                }
            }
            Some(ParamTarget::Level { key, level }) => {
                if !matches!(selections.get(key), Some(FilterValue::Location(_))) {
                    selections.insert(*key, FilterValue::Location(LocationValue::default()));
                }
                if let Some(FilterValue::Location(location)) = selections.get_mut(key) {
                    location.set_level(level, value);
                }
            }
            Some(ParamTarget::Ignored) => {
                debug!("ignoring bare `{name}` parameter");
            }
            None => push_verbatim(&mut selections, name, value),
        }
    }

    for filter in schema.iter() {
        if let FilterKind::CompositeRange { .. } = filter.kind {
            fill_composite(&mut selections, filter);
        }
    }
    selections
}

/// Comma-separated multi-choice value. Empty segments carry no choice.
fn split_list(value: &str) -> Vec<String> {
    value.split(',').filter(|item| !item.is_empty()).map(str::to_string).collect()
}

/// Updates one half of a range, starting from full bounds so the other half
/// is never left missing.
fn update_range(selections: &mut Selections, key: &str, bounds: &RangeBounds, update: impl FnOnce(&mut RangeValue)) {
    let mut range = match selections.get(key) {
        Some(FilterValue::Range(range)) => *range,
        _ => RangeValue::full(bounds),
    };
    update(&mut range);
    selections.insert(key, FilterValue::Range(range));
}

fn part_entry<'s>(selections: &'s mut Selections, filter: &FilterDefinition, part: &str) -> Option<&'s mut RangeValue> {
    fill_composite(selections, filter);
    match selections.get_mut(&filter.key) {
        Some(FilterValue::Composite(parts)) => parts.get_mut(part),
        _ => None,
    }
}

/// Makes sure every part of a composite filter exists, at full bounds if absent.
fn fill_composite(selections: &mut Selections, filter: &FilterDefinition) {
    let FilterKind::CompositeRange { bounds, parts } = &filter.kind else {
        return;
    };
    let mut values = match selections.remove(&filter.key) {
        Some(FilterValue::Composite(values)) => values,
        _ => BTreeMap::new(),
    };
    for part in parts {
        values.entry(part.key.clone()).or_insert_with(|| RangeValue::full(bounds));
    }
    selections.insert(filter.key.clone(), FilterValue::Composite(values));
}

fn push_verbatim(selections: &mut Selections, name: String, value: String) {
    let next = match selections.remove(&name) {
        Some(FilterValue::Text(first)) => FilterValue::List(vec![first, value]),
        Some(FilterValue::List(mut items)) => {
            items.push(value);
            FilterValue::List(items)
        }
        _ => FilterValue::Text(value),
    };
    selections.insert(name, next);
}

/// What `decode(encode(s))` gives back for `s`: neutral values dropped,
/// choices canonicalized to what the encoder emits, composites filled.
pub fn normalize(selections: &Selections, schema: &FilterSchema) -> Selections {
    let mut normalized = Selections::new();
    for filter in schema.iter() {
        let Some(value) = selections.get(&filter.key) else {
            continue;
        };
        let params = encode_entry(filter, value);
        if params.is_empty() {
            continue;
        }
        let canonical = match &filter.kind {
            FilterKind::MultiChoice { .. } => {
                FilterValue::List(split_list(&params[0].1))
            }
            FilterKind::SingleChoice { .. } => {
                let mut emitted = params.into_iter().map(|(_, param)| param).collect::<Vec<_>>();
                if emitted.len() == 1 {
                    FilterValue::Text(emitted.remove(0))
                } else {
                    FilterValue::List(emitted)
                }
            }
            _ => value.clone(),
        };
        normalized.insert(filter.key.clone(), canonical);
    }
    for filter in schema.iter() {
        fill_composite(&mut normalized, filter);
    }
    normalized
}

/// Sort specs requested by a decoded `sort` value, in order. Values that are
/// not `field:order` are dropped.
pub fn sort_specs(selections: &Selections, key: &str) -> Vec<SortSpec> {
    selections
        .get(key)
        .map(|value| value.choice_values().into_iter().filter_map(SortSpec::parse).collect())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auction_filters::{auction_filter_schema, auction_filter_schema_v1, DEFAULT_SORT};
    use crate::filter_schema::{ChoiceOption, FilterDefinition};
    use crate::selections::FilterValue;

    fn list(items: &[&str]) -> FilterValue {
        FilterValue::List(items.iter().map(|item| item.to_string()).collect())
    }

    fn schema() -> FilterSchema {
        auction_filter_schema(vec![])
    }

    /// Schema whose defaults are all neutral.
    fn neutral_schema() -> FilterSchema {
        let filters = schema().filters().iter().filter(|filter| filter.key != "sort").cloned().collect();
        FilterSchema::new(filters)
    }

    #[test]
    fn defaults_contain_every_declared_default() {
        let selections = defaults(&schema());
        assert_eq!(selections.len(), schema().filters().len());
        assert_eq!(selections.get("sort"), Some(&FilterValue::Text(DEFAULT_SORT.to_string())));
        assert_eq!(selections.get("propertyType"), Some(&list(&[])));
    }

    #[test]
    fn defaults_skip_filters_without_default() {
        let mut filters = schema().filters().to_vec();
        filters[1].default_value = None;
        let selections = defaults(&FilterSchema::new(filters));
        assert!(!selections.contains_key("propertyType"));
    }

    #[test]
    fn neutral_defaults_encode_to_nothing() {
        let schema = neutral_schema();
        assert_eq!(encode(&defaults(&schema), &schema), "");
    }

    #[test]
    fn default_sort_is_always_emitted() {
        assert_eq!(encode(&defaults(&schema()), &schema()), "sort=descontoSegundoLeilao:desc");
    }

    #[test]
    fn encodes_in_schema_order() {
        let selections = defaults(&schema())
            .with("price", FilterValue::Range(RangeValue::new(100_000.0, 300_000.0)))
            .with("modality", list(&["vendaOnline", "licitacaoAberta"]))
            .with("propertyType", list(&["Casa", "Imóvel rural"]));
        assert_eq!(
            encode(&selections, &schema()),
            "sort=descontoSegundoLeilao:desc&propertyType=Casa,Imóvel+rural\
             &modality=vendaOnline,licitacaoAberta&priceMin=100000&priceMax=300000"
        );
    }

    #[test]
    fn only_changed_discount_half_is_emitted() {
        let mut discounts = BTreeMap::new();
        discounts.insert("discount1".to_string(), RangeValue::new(0.0, 100.0));
        discounts.insert("discount2".to_string(), RangeValue::new(30.0, 80.0));
        let selections = Selections::new().with("discounts", FilterValue::Composite(discounts));
        assert_eq!(encode(&selections, &schema()), "secondDiscountMin=30&secondDiscountMax=80");
    }

    #[test]
    fn location_levels_are_emitted_independently() {
        let location = LocationValue { state: "".into(), city: "São Paulo".into(), neighborhood: "Moema".into() };
        let selections = Selections::new().with("location", FilterValue::Location(location));
        assert_eq!(encode(&selections, &schema()), "city=São+Paulo&neighborhood=Moema");
    }

    #[test]
    fn sort_fallback_keeps_field_order_values_only() {
        let selections = Selections::new().with("sort", list(&["areaTotal:asc", "semOrdem", "precoSegundoLeilao:asc"]));
        assert_eq!(encode(&selections, &schema()), "sort=areaTotal:asc&sort=precoSegundoLeilao:asc");

        let broken = Selections::new().with("sort", FilterValue::Text("areaTotal:".into()));
        assert_eq!(encode(&broken, &schema()), "");
    }

    #[test]
    fn mismatched_shapes_and_unknown_keys_are_omitted() {
        let selections = Selections::new()
            .with("price", list(&["100"]))
            .with("unknown", FilterValue::Text("x".into()));
        assert_eq!(encode(&selections, &schema()), "");
    }

    #[test]
    fn decode_fills_missing_discount_halves() {
        let selections = decode("firstDiscountMin=10", &schema());
        let discounts = selections.get("discounts").unwrap().as_composite().unwrap();
        assert_eq!(discounts["discount1"], RangeValue::new(10.0, 100.0));
        assert_eq!(discounts["discount2"], RangeValue::new(0.0, 100.0));
    }

    #[test]
    fn decode_always_populates_composites() {
        let selections = decode("", &schema());
        assert_eq!(selections.len(), 1);
        let discounts = selections.get("discounts").unwrap().as_composite().unwrap();
        assert_eq!(discounts.len(), 2);
    }

    #[test]
    fn decode_splits_multi_choice_and_accumulates_sort() {
        let selections = decode(
            "?propertyType=Casa,Terreno&sort=precoSegundoLeilao:asc&sort=dataSegundoLeilao:asc",
            &schema(),
        );
        assert_eq!(selections.get("propertyType"), Some(&list(&["Casa", "Terreno"])));
        assert_eq!(selections.get("sort"), Some(&list(&["precoSegundoLeilao:asc", "dataSegundoLeilao:asc"])));
        let specs = sort_specs(&selections, "sort");
        assert_eq!(specs.len(), 2);
        assert_eq!(specs[1].field, "dataSegundoLeilao");
    }

    #[test]
    fn empty_multi_choice_values_decode_to_an_empty_list() {
        let selections = decode("propertyType=&modality=vendaOnline,,sfiEditalUnico,", &schema());
        assert_eq!(selections.get("propertyType"), Some(&list(&[])));
        assert_eq!(selections.get("modality"), Some(&list(&["vendaOnline", "sfiEditalUnico"])));
        assert_eq!(encode(&selections, &schema()), "modality=vendaOnline,sfiEditalUnico");
    }

    #[test]
    fn blank_list_items_are_not_emitted() {
        let selections = Selections::new()
            .with("propertyType", list(&[""]))
            .with("modality", list(&["", "vendaOnline"]));
        assert_eq!(encode(&selections, &schema()), "modality=vendaOnline");
        assert_eq!(decode(&encode(&selections, &schema()), &schema()), normalize(&selections, &schema()));
    }

    #[test]
    fn decode_keeps_unknown_keys_verbatim() {
        let selections = decode("sort=descontoSegundoLeilao:desc&campanha=black+friday", &schema());
        assert_eq!(selections.get("sort"), Some(&FilterValue::Text(DEFAULT_SORT.into())));
        assert_eq!(selections.get("campanha"), Some(&FilterValue::Text("black friday".into())));
    }

    #[test]
    fn decode_fills_missing_price_half_from_bounds() {
        let selections = decode("priceMin=250000", &schema());
        assert_eq!(selections.get("price"), Some(&FilterValue::Range(RangeValue::new(250_000.0, 5_000_000.0))));
    }

    #[test]
    fn malformed_numbers_decode_to_nan() {
        let selections = decode("priceMin=abc&priceMax=", &schema());
        let price = selections.get("price").unwrap().as_range().unwrap();
        assert!(price.min.is_nan());
        assert_eq!(price.max, 0.0);
        assert!(!price.is_finite());
    }

    #[test]
    fn decode_routes_location_levels() {
        let selections = decode("state=SP&city=S%C3%A3o+Paulo", &schema());
        let location = selections.get("location").unwrap().as_location().unwrap();
        assert_eq!(location.state, "SP");
        assert_eq!(location.city, "São Paulo");
        assert!(location.neighborhood.is_empty());
    }

    #[test]
    fn location_params_are_verbatim_under_first_schema_version() {
        let selections = decode("state=SP", &auction_filter_schema_v1());
        assert_eq!(selections.get("state"), Some(&FilterValue::Text("SP".into())));
        assert!(!selections.contains_key("location"));
    }

    #[test]
    fn filter_params_are_recognized_by_schema() {
        assert!(has_filter_params("?firstDiscountMin=5", &schema()));
        assert!(has_filter_params("sort=precoSegundoLeilao:asc", &schema()));
        assert!(has_filter_params("city=Recife", &schema()));
        assert!(!has_filter_params("price=10&campanha=x", &schema()));
        assert!(!has_filter_params("", &schema()));
    }

    #[test]
    fn multi_select_round_trips() {
        let selections = Selections::new().with("propertyType", list(&["Casa", "Terreno"]));
        let decoded = decode(&encode(&selections, &schema()), &schema());
        assert_eq!(decoded.get("propertyType"), Some(&list(&["Casa", "Terreno"])));
        assert_eq!(decoded, normalize(&selections, &schema()));
    }

    #[test]
    fn custom_and_plain_single_choice_emit_raw_values() {
        let filters = vec![
            FilterDefinition {
                key: "auction".into(),
                label: "Leilão".into(),
                title: String::new(),
                kind: FilterKind::SingleChoice { options: vec![ChoiceOption::new("judicial", "Judicial")] },
                default_value: None,
            },
            FilterDefinition {
                key: "edital".into(),
                label: "Edital".into(),
                title: String::new(),
                kind: FilterKind::Custom,
                default_value: Some(FilterValue::Text(String::new())),
            },
        ];
        let schema = FilterSchema::new(filters);
        let selections = Selections::new()
            .with("auction", FilterValue::Text("extrajudicial".into()))
            .with("edital", FilterValue::Text("0042/2024".into()));
        assert_eq!(encode(&selections, &schema), "auction=extrajudicial&edital=0042/2024");
        assert_eq!(encode(&defaults(&schema), &schema), "");
    }

    mod properties {
        use super::*;
        use proptest::collection::vec;
        use proptest::prelude::*;
        use proptest::sample::subsequence;

        fn word() -> impl Strategy<Value = String> {
            "[A-Za-zÀ-ú][A-Za-zÀ-ú0-9 ]{0,10}"
        }

        fn range_in(min: f64, max: f64, step: f64) -> impl Strategy<Value = RangeValue> {
            let steps = ((max - min) / step) as u64;
            (0..=steps, 0..=steps).prop_map(move |(a, b)| {
                let (low, high) = if a <= b { (a, b) } else { (b, a) };
                RangeValue::new(min + low as f64 * step, min + high as f64 * step)
            })
        }

        prop_compose! {
            fn selections()(
                sort in prop_oneof![
                    Just(None),
                    Just(Some(FilterValue::Text(DEFAULT_SORT.to_string()))),
                    Just(Some(FilterValue::Text("precoSegundoLeilao:asc".to_string()))),
                    Just(Some(FilterValue::Text("areaTotal:desc".to_string()))),
                ],
                property_types in subsequence(vec!["Apartamento", "Casa", "Imóvel rural", "Terreno"], 0..=4),
                modality in subsequence(vec!["sfiEditalUnico", "vendaOnline"], 0..=2),
                price in range_in(0.0, 5_000_000.0, 5_000.0),
                first in range_in(0.0, 100.0, 1.0),
                second in range_in(0.0, 100.0, 1.0),
                include_discounts in any::<bool>(),
                levels in vec(prop_oneof![Just(String::new()), word()], 3),
            ) -> Selections {
                let mut selections = Selections::new()
                    .with("propertyType", list(&property_types))
                    .with("modality", list(&modality))
                    .with("price", FilterValue::Range(price))
                    .with("location", FilterValue::Location(LocationValue {
                        state: levels[0].clone(),
                        city: levels[1].clone(),
                        neighborhood: levels[2].clone(),
                    }));
                if let Some(sort) = sort {
                    selections.insert("sort", sort);
                }
                if include_discounts {
                    let mut parts = BTreeMap::new();
                    parts.insert("discount1".to_string(), first);
                    parts.insert("discount2".to_string(), second);
                    selections.insert("discounts", FilterValue::Composite(parts));
                }
                selections
            }
        }

        proptest! {
            #[test]
            fn decode_inverts_encode_up_to_normalization(selections in selections()) {
                let schema = schema();
                let decoded = decode(&encode(&selections, &schema), &schema);
                prop_assert_eq!(decoded, normalize(&selections, &schema));
            }

            #[test]
            fn encoding_is_stable_across_a_round_trip(selections in selections()) {
                let schema = schema();
                let once = encode(&selections, &schema);
                let twice = encode(&decode(&once, &schema), &schema);
                prop_assert_eq!(once, twice);
            }
        }
    }
}
