use crate::catalog::FilterDefinition;
use crate::coerce::format_number;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identity of an entry within one [`FilterList`](crate::list::FilterList).
///
/// Ids are handed out in increasing order and never reused, so they stay
/// valid across reorders and removals of other entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(u64);

impl EntryId {
    pub(crate) const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FilterValue {
    Number(f64),
    Text(String),
}

impl FilterValue {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FilterValue::Number(n) => Some(*n),
            FilterValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FilterValue::Text(t) => Some(t),
            FilterValue::Number(_) => None,
        }
    }
}

impl fmt::Display for FilterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterValue::Number(n) => f.write_str(&format_number(*n)),
            FilterValue::Text(t) => f.write_str(t),
        }
    }
}

/// One active filter function in a list.
#[derive(Debug, Clone)]
pub struct FilterEntry {
    pub(crate) id: EntryId,
    pub(crate) definition: &'static FilterDefinition,
    pub(crate) value: FilterValue,
    pub(crate) unit: String,
}

impl FilterEntry {
    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.definition.name
    }

    pub fn definition(&self) -> &'static FilterDefinition {
        self.definition
    }

    pub fn value(&self) -> &FilterValue {
        &self.value
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// The text between the parentheses, e.g. `30px` or `2px 2px red`.
    pub fn css_value(&self) -> String {
        format!("{}{}", self.value, self.unit)
    }

    /// The whole function, e.g. `blur(30px)`.
    pub fn to_css(&self) -> String {
        format!("{}({})", self.name(), self.css_value())
    }
}

/// Read-only snapshot of an entry, in list order, for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryView {
    pub id: EntryId,
    pub position: usize,
    pub name: &'static str,
    pub value: FilterValue,
    pub unit: String,
}

impl EntryView {
    pub(crate) fn new(position: usize, entry: &FilterEntry) -> Self {
        Self {
            id: entry.id,
            position,
            name: entry.name(),
            value: entry.value.clone(),
            unit: entry.unit.clone(),
        }
    }

    pub fn css_value(&self) -> String {
        format!("{}{}", self.value, self.unit)
    }
}
