//! Display indexes.
//!
//! Users refer to entries by their 1-based position (`1`, `2`, ...), or by a
//! range (`2-4`). The model only understands [`EntryId`]s, so every display
//! index is resolved against the current list before a command runs. A
//! command that names several indexes resolves all of them first; if one is
//! out of range nothing is touched.

use crate::error::{FilterError, Result};
use crate::list::FilterList;
use crate::model::EntryId;
use std::fmt;
use std::str::FromStr;

/// A user-facing, 1-based position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(usize);

impl DisplayIndex {
    /// Builds an index from a 1-based number. Zero is not a valid index.
    pub fn new(one_based: usize) -> Option<Self> {
        (one_based > 0).then_some(Self(one_based))
    }

    pub fn from_position(position: usize) -> Self {
        Self(position + 1)
    }

    /// The zero-based list position.
    pub fn position(self) -> usize {
        self.0 - 1
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim()
            .parse::<usize>()
            .ok()
            .and_then(DisplayIndex::new)
            .ok_or_else(|| format!("Invalid index format: {}", s))
    }
}

/// Parses a single index ("3") or an inclusive range ("2-4") into its first
/// and last index. A single index is a range of one.
pub fn parse_index_or_range(s: &str) -> std::result::Result<(DisplayIndex, DisplayIndex), String> {
    if let Some(dash_pos) = s.find('-') {
        if dash_pos > 0 {
            let start = DisplayIndex::from_str(&s[..dash_pos])?;
            let end = DisplayIndex::from_str(&s[dash_pos + 1..])?;
            if start > end {
                return Err(format!(
                    "Invalid range: start ({}) must be <= end ({})",
                    start, end
                ));
            }
            return Ok((start, end));
        }
    }

    DisplayIndex::from_str(s).map(|idx| (idx, idx))
}

/// Parses every input as an index or range against a list of `len` entries,
/// flattening the result. Ranges are bounds-checked before they are expanded.
pub fn parse_indexes<I: AsRef<str>>(inputs: &[I], len: usize) -> Result<Vec<DisplayIndex>> {
    let mut indexes = Vec::new();
    for input in inputs {
        let (start, end) = parse_index_or_range(input.as_ref()).map_err(FilterError::Api)?;
        if end.get() > len {
            return Err(not_found(end, len));
        }
        indexes.extend((start.get()..=end.get()).map(DisplayIndex));
    }
    Ok(indexes)
}

/// Resolves display indexes to entry ids against the current list.
pub fn resolve_indexes(
    list: &FilterList,
    indexes: &[DisplayIndex],
) -> Result<Vec<(DisplayIndex, EntryId)>> {
    indexes
        .iter()
        .map(|idx| {
            list.at(idx.position())
                .map(|entry| (*idx, entry.id()))
                .ok_or_else(|| not_found(*idx, list.len()))
        })
        .collect()
}

pub fn resolve_index(list: &FilterList, index: DisplayIndex) -> Result<EntryId> {
    resolve_indexes(list, &[index]).map(|resolved| resolved[0].1)
}

fn not_found(index: DisplayIndex, len: usize) -> FilterError {
    FilterError::Api(format!(
        "Index {} not found ({} filters in list)",
        index, len
    ))
}
