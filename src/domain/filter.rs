//! Filter mapping sent to the Atlas API
//!
//! Keys follow the API's Django-style lookups (`status__in`, `start_time__lt`).

use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use std::fmt;

/// A single filter value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterValue {
    Text(String),
    Integer(i64),
    IntegerList(Vec<i64>),
    /// Naive UTC date/time
    DateTime(NaiveDateTime),
}

impl FilterValue {
    /// Render the value as a query-string value
    ///
    /// Lists are comma joined and date/times become Unix timestamps.
    pub fn to_query_value(&self) -> String {
        match self {
            FilterValue::Text(s) => s.clone(),
            FilterValue::Integer(i) => i.to_string(),
            FilterValue::IntegerList(list) => list
                .iter()
                .map(|i| i.to_string())
                .collect::<Vec<_>>()
                .join(","),
            FilterValue::DateTime(dt) => dt.and_utc().timestamp().to_string(),
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::DateTime(dt) => write!(f, "{}", dt),
            other => write!(f, "{}", other.to_query_value()),
        }
    }
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::Text(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::Text(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Integer(value)
    }
}

impl From<Vec<i64>> for FilterValue {
    fn from(value: Vec<i64>) -> Self {
        FilterValue::IntegerList(value)
    }
}

impl From<NaiveDateTime> for FilterValue {
    fn from(value: NaiveDateTime) -> Self {
        FilterValue::DateTime(value)
    }
}

/// Ordered key/value constraints for one API request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    entries: BTreeMap<String, FilterValue>,
}

impl Filters {
    /// Create an empty filter mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add a constraint
    pub fn with(mut self, key: impl Into<String>, value: impl Into<FilterValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add a constraint, replacing any previous value for the key
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<FilterValue>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Add a constraint only when a value is present
    pub fn insert_opt<V: Into<FilterValue>>(&mut self, key: &str, value: Option<V>) {
        if let Some(v) = value {
            self.insert(key, v);
        }
    }

    /// Look up a constraint
    pub fn get(&self, key: &str) -> Option<&FilterValue> {
        self.entries.get(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate constraints in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FilterValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Render as query-string pairs
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.iter()
            .map(|(k, v)| (k.to_string(), v.to_query_value()))
            .collect()
    }
}

impl fmt::Display for Filters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(k, v)| format!("{}={}", k, v)).collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}
