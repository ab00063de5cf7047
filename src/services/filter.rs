//! Generic field/value filtering shared by every repository.
//!
//! A filter entry is skipped when its value is absent, empty or the `"all"`
//! sentinel the dashboard selects use. Text columns match by case-insensitive
//! substring, every other column by exact equality, and entries combine with
//! AND. Input order is kept.

use std::fmt;

use crate::models::record::{FieldValue, Record};

const MATCH_ALL: &str = "all";

/// Desired value of one filter entry.
///
/// A number keeps the text it was written as: text columns match against
/// that text, numeric columns against the parsed value.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterValue {
    Number { raw: String, value: f64 },
    Text(String),
}

impl FilterValue {
    /// Interprets a raw query-string value: anything that reads as a finite
    /// number also compares as one.
    pub fn parse_loose(raw: &str) -> Self {
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => FilterValue::Number { raw: raw.to_string(), value },
            _ => FilterValue::Text(raw.to_string()),
        }
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, FilterValue::Text(s) if s.is_empty() || s == MATCH_ALL)
    }

    fn as_text(&self) -> &str {
        match self {
            FilterValue::Number { raw, .. } => raw,
            FilterValue::Text(s) => s,
        }
    }

    fn as_number(&self) -> Option<f64> {
        match self {
            FilterValue::Number { value, .. } => Some(*value),
            FilterValue::Text(_) => None,
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_text())
    }
}

#[cfg(test)]
impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

#[cfg(test)]
impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Number { raw: value.to_string(), value: value as f64 }
    }
}

#[cfg(test)]
impl From<u32> for FilterValue {
    fn from(value: u32) -> Self {
        FilterValue::Number { raw: value.to_string(), value: f64::from(value) }
    }
}

#[cfg(test)]
impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Number { raw: value.to_string(), value }
    }
}

/// Field name → desired value map. `None` values mean "no constraint".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    entries: Vec<(String, Option<FilterValue>)>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with(mut self, field: &str, value: impl Into<FilterValue>) -> Self {
        self.insert(field, Some(value.into()));
        self
    }

    /// Adds an entry for an optional query parameter.
    pub fn with_opt(mut self, field: &str, value: Option<&str>) -> Self {
        self.insert(field, value.map(FilterValue::parse_loose));
        self
    }

    /// Sets `field`, replacing an earlier entry for the same field.
    pub fn insert(&mut self, field: &str, value: Option<FilterValue>) {
        match self.entries.iter_mut().find(|(name, _)| name == field) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((field.to_string(), value)),
        }
    }

    /// Entries that actually constrain the result.
    pub fn active(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.entries.iter().filter_map(|(name, value)| match value {
            Some(v) if !v.is_ignored() => Some((name.as_str(), v)),
            _ => None,
        })
    }

    pub fn is_unconstrained(&self) -> bool {
        self.active().next().is_none()
    }
}

fn field_matches(field: Option<FieldValue<'_>>, wanted: &FilterValue) -> bool {
    match field {
        Some(FieldValue::Text(text)) => text
            .to_lowercase()
            .contains(&wanted.as_text().to_lowercase()),
        Some(FieldValue::Integer(n)) => wanted.as_number() == Some(n as f64),
        Some(FieldValue::Number(x)) => wanted.as_number() == Some(x),
        None => false,
    }
}

pub fn matches<R: Record>(record: &R, filters: &Filters) -> bool {
    filters
        .active()
        .all(|(name, wanted)| field_matches(record.field(name), wanted))
}

/// Returns the records of `data` that satisfy every active entry of `filters`.
pub fn apply_filters<R: Record>(data: &[R], filters: &Filters) -> Vec<R> {
    if filters.is_unconstrained() {
        return data.to_vec();
    }
    data.iter()
        .filter(|record| matches(*record, filters))
        .cloned()
        .collect()
}

pub fn find_by_id<R: Record>(data: &[R], id: &R::Id) -> Option<R> {
    data.iter().find(|record| record.id() == id).cloned()
}
