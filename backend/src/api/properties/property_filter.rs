//! Matching catalog entries against decoded listing filters.

use std::collections::HashSet;

use common::property::Property;
use common::selections::{FilterValue, LocationValue, RangeValue, Selections};

/// Everything a listing request narrows the catalog by.
#[derive(Debug, Clone, Default)]
pub struct PropertyFilter {
    pub property_types: Vec<String>,
    pub modalities: Vec<String>,
    pub payment_conditions: Vec<String>,
    pub expense_payment_rules: Vec<String>,
    pub price: Option<RangeValue>,
    pub first_discount: Option<RangeValue>,
    pub second_discount: Option<RangeValue>,
    pub location: LocationValue,
    pub search: String,
    /// Set when only the user's favorites should be listed.
    pub favorites_only: Option<HashSet<String>>,
}

fn choices(selections: &Selections, key: &str) -> Vec<String> {
    selections
        .get(key)
        .map(|value| value.choice_values().into_iter().filter(|v| !v.is_empty()).map(str::to_string).collect())
        .unwrap_or_default()
}

impl PropertyFilter {
    pub fn from_selections(selections: &Selections) -> Self {
        let discounts = selections.get("discounts").and_then(FilterValue::as_composite);
        PropertyFilter {
            property_types: choices(selections, "propertyType"),
            modalities: choices(selections, "modality"),
            payment_conditions: choices(selections, "paymentConditions"),
            expense_payment_rules: choices(selections, "expensePaymentRules"),
            price: selections.get("price").and_then(FilterValue::as_range).copied(),
            first_discount: discounts.and_then(|parts| parts.get("discount1")).copied(),
            second_discount: discounts.and_then(|parts| parts.get("discount2")).copied(),
            location: selections.get("location").and_then(FilterValue::as_location).cloned().unwrap_or_default(),
            search: String::new(),
            favorites_only: None,
        }
    }

    pub fn matches(&self, property: &Property) -> bool {
        member(&self.property_types, &property.property_type)
            && member(&self.modalities, &property.modality)
            && overlaps(&self.payment_conditions, &property.payment_conditions)
            && overlaps(&self.expense_payment_rules, &property.expense_payment_rules)
            && in_range(self.price.as_ref(), property.second_sale_price)
            && in_range(self.first_discount.as_ref(), property.first_sale_discount_percent)
            && in_range(self.second_discount.as_ref(), property.second_sale_discount_percent)
            && same_place(&self.location.state, &property.state)
            && same_place(&self.location.city, &property.city)
            && same_place(&self.location.neighborhood, &property.neighborhood)
            && self.matches_search(property)
            && self.favorites_only.as_ref().is_none_or(|favorites| favorites.contains(&property.id))
    }

    fn matches_search(&self, property: &Property) -> bool {
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        [&property.identification, &property.property_type, &property.city, &property.neighborhood]
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

fn member(selected: &[String], value: &str) -> bool {
    selected.is_empty() || selected.iter().any(|s| s == value)
}

fn overlaps(selected: &[String], values: &[String]) -> bool {
    selected.is_empty() || selected.iter().any(|s| values.contains(s))
}

/// Non-finite bounds (a malformed `priceMin=abc`) leave that side open.
fn in_range(range: Option<&RangeValue>, value: f64) -> bool {
    let Some(range) = range else {
        return true;
    };
    (!range.min.is_finite() || value >= range.min) && (!range.max.is_finite() || value <= range.max)
}

fn same_place(selected: &str, value: &str) -> bool {
    selected.is_empty() || selected.to_lowercase() == value.to_lowercase()
}
