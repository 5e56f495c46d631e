//! Declarative filter schema: the ordered list of filters the bar renders
//! and the codec dispatches on.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::selections::FilterValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Asc => write!(f, "asc"),
            SortOrder::Desc => write!(f, "desc"),
        }
    }
}

impl SortOrder {
    pub fn parse(order: &str) -> Option<Self> {
        match order {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortSpec {
    #[serde(rename = "sortField")]
    pub field: String,
    #[serde(rename = "sortOrder")]
    pub order: SortOrder,
}

impl SortSpec {
    /// Parses the `field:order` form used by the `sort` query parameter.
    pub fn parse(raw: &str) -> Option<Self> {
        let (field, order) = raw.split_once(':')?;
        if field.is_empty() {
            return None;
        }
        Some(Self { field: field.to_string(), order: SortOrder::parse(order)? })
    }
}

impl fmt::Display for SortSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.order)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoiceOption {
    pub value: String,
    pub label: String,
    #[serde(flatten)]
    pub sort: Option<SortSpec>,
}

impl ChoiceOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self { value: value.into(), label: label.into(), sort: None }
    }

    pub fn sorting(value: impl Into<String>, label: impl Into<String>, field: impl Into<String>, order: SortOrder) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            sort: Some(SortSpec { field: field.into(), order }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

/// One independent sub-range of a composite range, e.g. the first-auction discount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositePart {
    pub key: String,
    /// Query parameters are `<prefix>Min` and `<prefix>Max`.
    pub param_prefix: String,
    pub label: String,
}

/// A node of the state → city → neighborhood cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationNode {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<LocationNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum FilterKind {
    SingleChoice { options: Vec<ChoiceOption> },
    MultiChoice { options: Vec<ChoiceOption> },
    Range { bounds: RangeBounds },
    CompositeRange { bounds: RangeBounds, parts: Vec<CompositePart> },
    Hierarchical {
        #[serde(default)]
        tree: Vec<LocationNode>,
    },
    Custom,
}

impl FilterKind {
    /// Whether `value` has the shape this kind stores.
    pub fn accepts(&self, value: &FilterValue) -> bool {
        matches!(
            (self, value),
            (FilterKind::SingleChoice { .. }, FilterValue::Text(_) | FilterValue::List(_))
                | (FilterKind::MultiChoice { .. }, FilterValue::List(_))
                | (FilterKind::Range { .. }, FilterValue::Range(_))
                | (FilterKind::CompositeRange { .. }, FilterValue::Composite(_))
                | (FilterKind::Hierarchical { .. }, FilterValue::Location(_))
                | (FilterKind::Custom, FilterValue::Text(_))
        )
    }

    pub fn options(&self) -> &[ChoiceOption] {
        match self {
            FilterKind::SingleChoice { options } | FilterKind::MultiChoice { options } => options,
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterDefinition {
    pub key: String,
    pub label: String,
    #[serde(default)]
    pub title: String,
    #[serde(flatten)]
    pub kind: FilterKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<FilterValue>,
}

impl FilterDefinition {
    pub fn option(&self, value: &str) -> Option<&ChoiceOption> {
        self.kind.options().iter().find(|option| option.value == value)
    }

    /// Label for a choice value, falling back to the raw value when the
    /// option disappeared from the schema.
    pub fn option_label<'a>(&'a self, value: &'a str) -> &'a str {
        self.option(value).map(|option| option.label.as_str()).unwrap_or(value)
    }

    /// A single-choice filter whose options map to sort specs.
    pub fn is_sort(&self) -> bool {
        matches!(&self.kind, FilterKind::SingleChoice { options } if options.iter().any(|o| o.sort.is_some()))
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchemaError {
    #[error("filter key `{0}` is declared more than once")]
    DuplicateKey(String),
    #[error("filter key must not be empty")]
    EmptyKey,
    #[error("choice filter `{0}` has no options")]
    NoOptions(String),
    #[error("range filter `{key}` has invalid bounds min={min} max={max} step={step}")]
    InvalidBounds { key: String, min: f64, max: f64, step: f64 },
    #[error("composite filter `{0}` has no parts")]
    NoParts(String),
    #[error("composite filter `{key}` declares part `{part}` more than once")]
    DuplicatePart { key: String, part: String },
    #[error("default value of `{0}` does not match its kind")]
    DefaultShapeMismatch(String),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSchema {
    filters: Vec<FilterDefinition>,
}

impl FilterSchema {
    pub fn new(filters: Vec<FilterDefinition>) -> Self {
        Self { filters }
    }

    pub fn filters(&self) -> &[FilterDefinition] {
        &self.filters
    }

    pub fn iter(&self) -> impl Iterator<Item = &FilterDefinition> {
        self.filters.iter()
    }

    pub fn get(&self, key: &str) -> Option<&FilterDefinition> {
        self.filters.iter().find(|filter| filter.key == key)
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn validate(&self) -> Result<(), SchemaError> {
        let mut seen = BTreeSet::new();
        for filter in &self.filters {
            if filter.key.is_empty() {
                return Err(SchemaError::EmptyKey);
            }
            if !seen.insert(filter.key.as_str()) {
                return Err(SchemaError::DuplicateKey(filter.key.clone()));
            }
            match &filter.kind {
                FilterKind::SingleChoice { options } | FilterKind::MultiChoice { options } => {
                    if options.is_empty() {
                        return Err(SchemaError::NoOptions(filter.key.clone()));
                    }
                }
                FilterKind::Range { bounds } => check_bounds(&filter.key, bounds)?,
                FilterKind::CompositeRange { bounds, parts } => {
                    check_bounds(&filter.key, bounds)?;
                    if parts.is_empty() {
                        return Err(SchemaError::NoParts(filter.key.clone()));
                    }
                    let mut part_keys = BTreeSet::new();
                    for part in parts {
                        if !part_keys.insert(part.key.as_str()) {
                            return Err(SchemaError::DuplicatePart {
                                key: filter.key.clone(),
                                part: part.key.clone(),
                            });
                        }
                    }
                }
                FilterKind::Hierarchical { .. } | FilterKind::Custom => {}
            }
            if let Some(default_value) = &filter.default_value {
                if !filter.kind.accepts(default_value) {
                    return Err(SchemaError::DefaultShapeMismatch(filter.key.clone()));
                }
            }
        }
        Ok(())
    }
}

fn check_bounds(key: &str, bounds: &RangeBounds) -> Result<(), SchemaError> {
    let valid = bounds.min.is_finite() && bounds.max.is_finite() && bounds.min <= bounds.max && bounds.step > 0.0;
    if valid {
        Ok(())
    } else {
        Err(SchemaError::InvalidBounds {
            key: key.to_string(),
            min: bounds.min,
            max: bounds.max,
            step: bounds.step,
        })
    }
}
