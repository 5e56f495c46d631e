//! In-memory filter selections, one value per filter key.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::filter_schema::RangeBounds;

/// Query parameter names of the location cascade, parent first.
pub const LOCATION_LEVELS: [&str; 3] = ["state", "city", "neighborhood"];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RangeValue {
    pub min: f64,
    pub max: f64,
}

impl RangeValue {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn full(bounds: &RangeBounds) -> Self {
        Self { min: bounds.min, max: bounds.max }
    }

    /// True when the range covers the whole legal interval, i.e. filters nothing.
    pub fn is_full(&self, bounds: &RangeBounds) -> bool {
        self.min == bounds.min && self.max == bounds.max
    }

    /// A malformed `priceMin=abc` decodes to NaN; this tells the two apart.
    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LocationValue {
    pub state: String,
    pub city: String,
    pub neighborhood: String,
}

impl LocationValue {
    pub fn is_empty(&self) -> bool {
        self.state.is_empty() && self.city.is_empty() && self.neighborhood.is_empty()
    }

    pub fn level(&self, level: &str) -> Option<&str> {
        match level {
            "state" => Some(&self.state),
            "city" => Some(&self.city),
            "neighborhood" => Some(&self.neighborhood),
            _ => None,
        }
    }

    pub fn set_level(&mut self, level: &str, value: String) {
        match level {
            "state" => self.state = value,
            "city" => self.city = value,
            "neighborhood" => self.neighborhood = value,
            _ => {}
        }
    }

    /// Non-empty levels in cascade order, paired with their parameter name.
    pub fn filled_levels(&self) -> Vec<(&'static str, &str)> {
        LOCATION_LEVELS
            .iter()
            .filter_map(|level| {
                let value = self.level(level)?;
                (!value.is_empty()).then_some((*level, value))
            })
            .collect()
    }
}

/// Value held for one filter key. Its variant must match the definition kind.
///
/// Untagged on the wire so defaults read naturally in the schema JSON:
/// `"desc"`, `[]`, `{"min":0,"max":100}`, `{"state":""}` and
/// `{"discount1":{"min":0,"max":100}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Text(String),
    List(Vec<String>),
    Range(RangeValue),
    Location(LocationValue),
    Composite(BTreeMap<String, RangeValue>),
}

impl FilterValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FilterValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FilterValue::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_range(&self) -> Option<&RangeValue> {
        match self {
            FilterValue::Range(range) => Some(range),
            _ => None,
        }
    }

    pub fn as_location(&self) -> Option<&LocationValue> {
        match self {
            FilterValue::Location(location) => Some(location),
            _ => None,
        }
    }

    pub fn as_composite(&self) -> Option<&BTreeMap<String, RangeValue>> {
        match self {
            FilterValue::Composite(parts) => Some(parts),
            _ => None,
        }
    }

    /// Text and list values flattened into the selected choice values.
    pub fn choice_values(&self) -> Vec<&str> {
        match self {
            FilterValue::Text(text) => vec![text.as_str()],
            FilterValue::List(items) => items.iter().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Selections(BTreeMap<String, FilterValue>);

impl Selections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.0.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut FilterValue> {
        self.0.get_mut(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: FilterValue) -> Option<FilterValue> {
        self.0.insert(key.into(), value)
    }

    pub fn remove(&mut self, key: &str) -> Option<FilterValue> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FilterValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Copy with `key` replaced; the receiver is left untouched.
    pub fn with(&self, key: impl Into<String>, value: FilterValue) -> Self {
        let mut next = self.clone();
        next.insert(key, value);
        next
    }

    pub fn without(&self, key: &str) -> Self {
        let mut next = self.clone();
        next.remove(key);
        next
    }
}

impl FromIterator<(String, FilterValue)> for Selections {
    fn from_iter<I: IntoIterator<Item = (String, FilterValue)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
