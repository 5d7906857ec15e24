//! # Filter List Model
//!
//! [`FilterList`] owns the ordered collection of active filter functions and is
//! the only thing that mutates it. Every entry carries an [`EntryId`] assigned
//! when it is added; all mutations address entries by id, never by position.
//!
//! ## Invariants
//!
//! - Positions are the indexes of the backing vector, so they are always the
//!   dense range `0..len()`.
//! - Ids increase monotonically for the lifetime of the list and are never
//!   reused, including across [`FilterList::set_css`] calls.
//! - Each mutation either applies completely or returns an error with the list
//!   untouched. Inputs are validated before anything is written.
//!
//! ## Round trip
//!
//! For canonical input (values in range, canonical units, at most one decimal
//! place), `FilterList::from_css(s)?.to_css() == s` up to separator spacing.

use crate::catalog::{self, FilterDefinition};
use crate::coerce::{coerce, invalid, round_tenths, Coerced};
use crate::error::{FilterError, Result};
use crate::model::{EntryId, EntryView, FilterEntry, FilterValue};
use crate::reorder::move_within;
use crate::tokenizer::tokenize;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What to do with a token whose name is not in the catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownKindPolicy {
    /// Fail the whole parse with [`FilterError::UnknownFilterKind`]
    #[default]
    Reject,

    /// Drop the token and keep going
    Skip,
}

impl FromStr for UnknownKindPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "reject" => Ok(UnknownKindPolicy::Reject),
            "skip" => Ok(UnknownKindPolicy::Skip),
            other => Err(format!(
                "Invalid unknown-kinds policy: {} (expected reject or skip)",
                other
            )),
        }
    }
}

impl fmt::Display for UnknownKindPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnknownKindPolicy::Reject => f.write_str("reject"),
            UnknownKindPolicy::Skip => f.write_str("skip"),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct FilterList {
    entries: Vec<FilterEntry>,
    next_id: u64,
}

impl FilterList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a filter value into a new list, rejecting unknown kinds.
    pub fn from_css(input: &str) -> Result<Self> {
        let mut list = Self::new();
        list.set_css(input)?;
        Ok(list)
    }

    /// Replaces the contents of the list with the parsed `input`.
    pub fn set_css(&mut self, input: &str) -> Result<()> {
        self.set_css_with(input, UnknownKindPolicy::Reject)
            .map(|_| ())
    }

    /// Replaces the contents of the list with the parsed `input`.
    ///
    /// Returns the names of tokens skipped under [`UnknownKindPolicy::Skip`].
    /// On error the list keeps its previous contents.
    pub fn set_css_with(&mut self, input: &str, policy: UnknownKindPolicy) -> Result<Vec<String>> {
        if input.is_empty() {
            return Err(FilterError::EmptyInput);
        }

        let tokens = tokenize(input)?;
        let mut staged = Vec::with_capacity(tokens.len());
        let mut skipped = Vec::new();
        let mut next_id = self.next_id;

        for token in tokens {
            let Some(def) = catalog::lookup(&token.name) else {
                match policy {
                    UnknownKindPolicy::Reject => {
                        return Err(FilterError::UnknownFilterKind(token.name));
                    }
                    UnknownKindPolicy::Skip => {
                        tracing::warn!(name = %token.name, "skipping unknown filter kind");
                        skipped.push(token.name);
                        continue;
                    }
                }
            };
            let coerced = coerce(def, &token.value)?;
            staged.push(make_entry(EntryId::new(next_id), def, coerced));
            next_id += 1;
        }

        self.entries = staged;
        self.next_id = next_id;
        tracing::debug!(count = self.entries.len(), "parsed filter value");
        Ok(skipped)
    }

    /// Appends a new `name` filter with `raw` as its value.
    pub fn add(&mut self, name: &str, raw: &str) -> Result<EntryId> {
        let def = resolve(name)?;
        let coerced = coerce(def, raw)?;
        Ok(self.push(def, coerced))
    }

    /// Appends a new `name` filter with its kind's starting value.
    pub fn add_default(&mut self, name: &str) -> Result<EntryId> {
        let def = resolve(name)?;
        let coerced = coerce(def, &def.default_raw_value())?;
        Ok(self.push(def, coerced))
    }

    fn push(&mut self, def: &'static FilterDefinition, coerced: Coerced) -> EntryId {
        let id = EntryId::new(self.next_id);
        self.next_id += 1;
        self.entries.push(make_entry(id, def, coerced));
        tracing::debug!(%id, name = def.name, position = self.entries.len() - 1, "added filter");
        id
    }

    /// Removes an entry. Later entries move up one position.
    pub fn remove(&mut self, id: EntryId) -> Result<FilterEntry> {
        let position = self.require(id)?;
        let removed = self.entries.remove(position);
        tracing::debug!(%id, position, "removed filter");
        Ok(removed)
    }

    /// Removes several entries at once. If any id is unknown nothing is removed.
    pub fn remove_many(&mut self, ids: &[EntryId]) -> Result<Vec<FilterEntry>> {
        for id in ids {
            self.require(*id)?;
        }
        let mut removed = Vec::with_capacity(ids.len());
        for id in ids {
            // Duplicates in `ids` are already gone on the second pass.
            if let Some(position) = self.position(*id) {
                removed.push(self.entries.remove(position));
            }
        }
        tracing::debug!(count = removed.len(), "removed filters");
        Ok(removed)
    }

    /// Re-coerces an entry's value against its own definition.
    ///
    /// Numeric values are rounded to one decimal place. The entry keeps its
    /// id, kind and position.
    pub fn update(&mut self, id: EntryId, raw: &str) -> Result<()> {
        let position = self.require(id)?;
        let entry = &mut self.entries[position];
        let coerced = coerce(entry.definition, raw)?;
        let value = match coerced.value {
            FilterValue::Number(n) => {
                let rounded = round_tenths(n);
                if !rounded.is_finite() {
                    return Err(invalid(entry.definition, raw));
                }
                FilterValue::Number(rounded)
            }
            text => text,
        };
        entry.value = value;
        entry.unit = coerced.unit;
        tracing::debug!(%id, value = %entry.css_value(), "updated filter");
        Ok(())
    }

    /// Moves an entry to `position` (clamped to the last slot) and returns the
    /// position it ended up at.
    pub fn move_to(&mut self, id: EntryId, position: usize) -> Result<usize> {
        let from = self.require(id)?;
        let to = move_within(&mut self.entries, from, position).ok_or(FilterError::UnknownEntry(id))?;
        tracing::debug!(%id, from, to, "moved filter");
        Ok(to)
    }

    /// Serializes the list back into a filter value. An empty list is `none`.
    pub fn to_css(&self) -> String {
        if self.entries.is_empty() {
            return "none".to_string();
        }
        self.entries
            .iter()
            .map(FilterEntry::to_css)
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The `value+unit` text of one entry.
    pub fn value_css(&self, id: EntryId) -> Result<String> {
        self.get(id)
            .map(FilterEntry::css_value)
            .ok_or(FilterError::UnknownEntry(id))
    }

    pub fn get(&self, id: EntryId) -> Option<&FilterEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// The entry at `position`, if any.
    pub fn at(&self, position: usize) -> Option<&FilterEntry> {
        self.entries.get(position)
    }

    /// Snapshot of all entries in position order.
    pub fn entries(&self) -> Vec<EntryView> {
        self.entries
            .iter()
            .enumerate()
            .map(|(position, entry)| EntryView::new(position, entry))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FilterEntry> {
        self.entries.iter()
    }

    pub fn ids(&self) -> Vec<EntryId> {
        self.entries.iter().map(FilterEntry::id).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn require(&self, id: EntryId) -> Result<usize> {
        self.position(id).ok_or(FilterError::UnknownEntry(id))
    }
}

impl fmt::Display for FilterList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl FromStr for FilterList {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_css(s)
    }
}

fn resolve(name: &str) -> Result<&'static FilterDefinition> {
    catalog::lookup(name).ok_or_else(|| FilterError::UnknownFilterKind(name.to_string()))
}

fn make_entry(id: EntryId, definition: &'static FilterDefinition, coerced: Coerced) -> FilterEntry {
    FilterEntry {
        id,
        definition,
        value: coerced.value,
        unit: coerced.unit,
    }
}
