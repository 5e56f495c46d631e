//! Draft/applied state of the filter bar.
//!
//! The popover edits a draft; only `Apply`, a chip removal or "clear all"
//! touch the applied snapshot, and those are the only transitions that emit a
//! new query for the URL.

use tracing::debug;

use crate::filter_chips::ChipRemoval;
use crate::filter_schema::{FilterKind, FilterSchema};
use crate::query_codec::{decode, default_for, defaults, encode, has_filter_params, normalize};
use crate::selections::{FilterValue, RangeValue, Selections};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum FilterBar {
    /// Waiting for the schema; nothing can be edited yet.
    #[default]
    Hydrating,
    Ready { draft: Selections, applied: Selections },
}

#[derive(Debug, Clone, PartialEq)]
pub enum FilterBarEvent {
    SchemaLoaded { url_query: String },
    Edit { key: String, value: FilterValue },
    ResetDraft { key: String },
    DiscardDraft,
    Apply,
    ClearOne(ChipRemoval),
    ClearAll,
    UrlChanged { url_query: String },
}

/// Query to write to the URL and fetch the listing with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Emitted {
    pub query: String,
}

impl FilterBar {
    pub fn handle(self, event: FilterBarEvent, schema: &FilterSchema) -> (FilterBar, Option<Emitted>) {
        match (self, event) {
            (_, FilterBarEvent::SchemaLoaded { url_query }) => {
                let applied = if has_filter_params(&url_query, schema) {
                    decode(&url_query, schema)
                } else {
                    defaults(schema)
                };
                emit(applied.clone(), applied, schema)
            }
            (FilterBar::Hydrating, event) => {
                debug!("filter bar is hydrating, dropping {event:?}");
                (FilterBar::Hydrating, None)
            }
            (FilterBar::Ready { draft, applied }, FilterBarEvent::Edit { key, value }) => {
                let accepted = schema.get(&key).is_some_and(|filter| filter.kind.accepts(&value));
                if !accepted {
                    debug!("ignoring edit of `{key}` with {value:?}");
                    return (FilterBar::Ready { draft, applied }, None);
                }
                (FilterBar::Ready { draft: draft.with(key, value), applied }, None)
            }
            (FilterBar::Ready { draft, applied }, FilterBarEvent::ResetDraft { key }) => {
                let draft = reset_key(&draft, schema, &key);
                (FilterBar::Ready { draft, applied }, None)
            }
            (FilterBar::Ready { applied, .. }, FilterBarEvent::DiscardDraft) => {
                (FilterBar::Ready { draft: applied.clone(), applied }, None)
            }
            (FilterBar::Ready { draft, .. }, FilterBarEvent::Apply) => emit(draft.clone(), draft, schema),
            (FilterBar::Ready { draft, applied }, FilterBarEvent::ClearOne(removal)) => {
                let draft = clear_target(&draft, schema, &removal);
                let applied = clear_target(&applied, schema, &removal);
                emit(draft, applied, schema)
            }
            (FilterBar::Ready { .. }, FilterBarEvent::ClearAll) => {
                let applied = defaults(schema);
                emit(applied.clone(), applied, schema)
            }
            (FilterBar::Ready { .. }, FilterBarEvent::UrlChanged { url_query }) => {
                let applied = decode(&url_query, schema);
                (FilterBar::Ready { draft: applied.clone(), applied }, None)
            }
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, FilterBar::Ready { .. })
    }

    pub fn draft(&self) -> Option<&Selections> {
        match self {
            FilterBar::Ready { draft, .. } => Some(draft),
            FilterBar::Hydrating => None,
        }
    }

    pub fn applied(&self) -> Option<&Selections> {
        match self {
            FilterBar::Ready { applied, .. } => Some(applied),
            FilterBar::Hydrating => None,
        }
    }

    /// Some applied key differs from its schema default. A key the applied
    /// snapshot lacks counts as default, so a URL without `sort` can still
    /// end up inactive.
    pub fn has_active_filters(&self, schema: &FilterSchema) -> bool {
        let Some(applied) = self.applied() else {
            return false;
        };
        let applied = normalize(applied, schema);
        let defaults = normalize(&defaults(schema), schema);
        schema
            .iter()
            .any(|filter| applied.get(&filter.key).is_some_and(|value| defaults.get(&filter.key) != Some(value)))
    }

    /// The draft holds edits that were not applied yet.
    pub fn has_pending_edits(&self) -> bool {
        matches!(self, FilterBar::Ready { draft, applied } if draft != applied)
    }
}

fn emit(draft: Selections, applied: Selections, schema: &FilterSchema) -> (FilterBar, Option<Emitted>) {
    let query = encode(&applied, schema);
    (FilterBar::Ready { draft, applied }, Some(Emitted { query }))
}

fn reset_key(selections: &Selections, schema: &FilterSchema, key: &str) -> Selections {
    match default_for(schema, key) {
        Some(default_value) => selections.with(key, default_value),
        None => selections.without(key),
    }
}

fn clear_target(selections: &Selections, schema: &FilterSchema, removal: &ChipRemoval) -> Selections {
    let Some(part) = &removal.part else {
        return reset_key(selections, schema, &removal.key);
    };
    let Some(filter) = schema.get(&removal.key) else {
        return selections.clone();
    };
    let FilterKind::CompositeRange { bounds, .. } = &filter.kind else {
        return reset_key(selections, schema, &removal.key);
    };
    let mut parts = selections
        .get(&removal.key)
        .and_then(FilterValue::as_composite)
        .cloned()
        .unwrap_or_default();
    parts.insert(part.clone(), RangeValue::full(bounds));
    selections.with(removal.key.clone(), FilterValue::Composite(parts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auction_filters::{auction_filter_schema, DEFAULT_SORT};
    use crate::filter_chips::chips_for;

    fn schema() -> FilterSchema {
        auction_filter_schema(vec![])
    }

    fn ready(url_query: &str) -> (FilterBar, Option<Emitted>) {
        FilterBar::Hydrating.handle(FilterBarEvent::SchemaLoaded { url_query: url_query.to_string() }, &schema())
    }

    fn edit(key: &str, value: FilterValue) -> FilterBarEvent {
        FilterBarEvent::Edit { key: key.to_string(), value }
    }

    fn list(items: &[&str]) -> FilterValue {
        FilterValue::List(items.iter().map(|item| item.to_string()).collect())
    }

    #[test]
    fn empty_url_hydrates_to_defaults_and_emits_default_sort() {
        let (bar, emitted) = ready("");
        assert_eq!(bar.applied(), Some(&defaults(&schema())));
        assert_eq!(emitted.unwrap().query, "sort=descontoSegundoLeilao:desc");
        assert!(!bar.has_active_filters(&schema()));
    }

    #[test]
    fn url_with_filters_hydrates_from_url() {
        let (bar, emitted) = ready("?propertyType=Casa&page=2");
        assert_eq!(bar.applied().unwrap().get("propertyType"), Some(&list(&["Casa"])));
        assert_eq!(emitted.unwrap().query, "propertyType=Casa");
        assert!(bar.has_active_filters(&schema()));
    }

    #[test]
    fn events_before_the_schema_are_dropped() {
        let (bar, emitted) = FilterBar::Hydrating.handle(FilterBarEvent::Apply, &schema());
        assert_eq!(bar, FilterBar::Hydrating);
        assert!(emitted.is_none());
        let (bar, _) = FilterBar::Hydrating.handle(edit("propertyType", list(&["Casa"])), &schema());
        assert!(!bar.is_ready());
    }

    #[test]
    fn edits_stay_in_the_draft_until_applied() {
        let (bar, _) = ready("");
        let (bar, emitted) = bar.handle(edit("propertyType", list(&["Casa"])), &schema());
        assert!(emitted.is_none());
        assert!(bar.has_pending_edits());
        assert_eq!(bar.applied(), Some(&defaults(&schema())));

        let (bar, emitted) = bar.handle(FilterBarEvent::Apply, &schema());
        assert_eq!(emitted.unwrap().query, "sort=descontoSegundoLeilao:desc&propertyType=Casa");
        assert!(!bar.has_pending_edits());
    }

    #[test]
    fn mis_shaped_and_unknown_edits_are_ignored() {
        let (bar, _) = ready("");
        let (bar, _) = bar.handle(edit("price", list(&["1"])), &schema());
        let (bar, _) = bar.handle(edit("nope", FilterValue::Text("x".into())), &schema());
        assert!(!bar.has_pending_edits());
    }

    #[test]
    fn discard_and_reset_only_touch_the_draft() {
        let (bar, _) = ready("modality=vendaOnline");
        let (bar, _) = bar.handle(edit("propertyType", list(&["Casa"])), &schema());
        let (discarded, emitted) = bar.clone().handle(FilterBarEvent::DiscardDraft, &schema());
        assert!(emitted.is_none());
        assert!(!discarded.has_pending_edits());

        let (reset, emitted) = bar.handle(FilterBarEvent::ResetDraft { key: "modality".into() }, &schema());
        assert!(emitted.is_none());
        assert_eq!(reset.draft().unwrap().get("modality"), Some(&list(&[])));
        assert_eq!(reset.applied().unwrap().get("modality"), Some(&list(&["vendaOnline"])));
    }

    #[test]
    fn clearing_a_discount_chip_resets_only_that_part() {
        let (bar, _) = ready("firstDiscountMin=10&firstDiscountMax=50&secondDiscountMin=20&secondDiscountMax=90");
        let applied = bar.applied().unwrap().clone();
        let chip = chips_for(&applied, &schema()).into_iter().find(|chip| chip.label.starts_with("Primeira")).unwrap();

        let (bar, emitted) = bar.handle(FilterBarEvent::ClearOne(chip.removal), &schema());
        assert_eq!(emitted.unwrap().query, "secondDiscountMin=20&secondDiscountMax=90");
        let discounts = bar.draft().unwrap().get("discounts").unwrap().as_composite().unwrap();
        assert_eq!(discounts["discount1"], RangeValue::new(0.0, 100.0));
    }

    #[test]
    fn clearing_the_price_chip_resets_both_snapshots() {
        let (bar, _) = ready("priceMin=100000&priceMax=300000");
        let (bar, emitted) = bar.handle(FilterBarEvent::ClearOne(ChipRemoval::key("price")), &schema());
        assert_eq!(emitted.unwrap().query, "");
        assert_eq!(bar.draft(), bar.applied());
        let price = FilterValue::Range(RangeValue::new(0.0, 5_000_000.0));
        assert_eq!(bar.applied().unwrap().get("price"), Some(&price));
        assert_eq!(bar.draft().unwrap().get("price"), Some(&price));
    }

    #[test]
    fn clearing_the_last_filter_of_a_sortless_url_leaves_nothing_active() {
        let (bar, _) = ready("propertyType=Casa");
        assert!(bar.has_active_filters(&schema()));
        let (bar, emitted) = bar.handle(FilterBarEvent::ClearOne(ChipRemoval::key("propertyType")), &schema());
        assert_eq!(emitted.unwrap().query, "");
        assert!(!bar.has_active_filters(&schema()));
    }

    #[test]
    fn a_non_default_sort_is_an_active_filter() {
        let (bar, _) = ready("sort=precoSegundoLeilao:asc");
        assert!(bar.has_active_filters(&schema()));
    }

    #[test]
    fn clear_all_restores_defaults() {
        let (bar, _) = ready("propertyType=Casa&state=SP");
        let (bar, emitted) = bar.handle(FilterBarEvent::ClearAll, &schema());
        assert_eq!(emitted.unwrap().query, format!("sort={DEFAULT_SORT}"));
        assert!(!bar.has_active_filters(&schema()));
    }

    #[test]
    fn url_changes_are_followed_silently() {
        let (bar, _) = ready("");
        let (bar, emitted) = bar.handle(FilterBarEvent::UrlChanged { url_query: "state=RJ".into() }, &schema());
        assert!(emitted.is_none());
        let location = bar.applied().unwrap().get("location").unwrap().as_location().unwrap();
        assert_eq!(location.state, "RJ");
        assert!(!bar.has_pending_edits());
    }
}
