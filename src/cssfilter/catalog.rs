//! Filter kind catalog.
//!
//! This module is the schema for every filter function the editor understands:
//! what kind of value it takes, which unit that value is written in, and the
//! range a numeric value is clamped to.
//!
//! | Name | Kind | Unit | Range |
//! |------|------|------|-------|
//! | `blur` | Length | `px` | `[0, ∞)` |
//! | `brightness`, `contrast`, `saturate` | Percentage | `%` | `[0, ∞)` |
//! | `grayscale`, `invert`, `opacity`, `sepia` | Percentage | `%` | `[0, 100]` |
//! | `hue-rotate` | Angle | `deg` | `[0, 360]` |
//! | `drop-shadow`, `url` | FreeText | | |
//!
//! The table is a `const` slice; lookups go through a name index built once
//! on first use.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// The kind of value a filter function takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueKind {
    /// A CSS length, written in `px` (e.g. `blur(2px)`)
    Length,

    /// A percentage, written with `%` (e.g. `sepia(40%)`)
    ///
    /// A bare number is read as a fraction: `0.5` means `50%`.
    Percentage,

    /// An angle, written in `deg` (e.g. `hue-rotate(90deg)`)
    Angle,

    /// Opaque text passed through verbatim (e.g. `drop-shadow(1px 1px red)`)
    FreeText,
}

impl ValueKind {
    /// The canonical unit suffix for this kind. Empty for free text.
    pub const fn unit(self) -> &'static str {
        match self {
            ValueKind::Length => "px",
            ValueKind::Percentage => "%",
            ValueKind::Angle => "deg",
            ValueKind::FreeText => "",
        }
    }

    pub const fn is_numeric(self) -> bool {
        !matches!(self, ValueKind::FreeText)
    }
}

/// Inclusive numeric bounds. An unbounded maximum is `f64::INFINITY`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Clamp `value` into the range. Non-finite bounds are not applied.
    pub fn clamp(&self, value: f64) -> f64 {
        let mut value = value;
        if self.min.is_finite() && value < self.min {
            value = self.min;
        }
        if self.max.is_finite() && value > self.max {
            value = self.max;
        }
        value
    }

    pub fn is_bounded_above(&self) -> bool {
        self.max.is_finite()
    }
}

/// Definition of a single filter function.
#[derive(Debug, Clone, Serialize)]
pub struct FilterDefinition {
    /// Function name as written in CSS (e.g. "blur", "drop-shadow")
    pub name: &'static str,

    pub kind: ValueKind,

    /// Clamp range for numeric kinds, `None` for free text
    pub range: Option<Range>,

    /// Example input shown to users for free-text kinds
    pub placeholder: Option<&'static str>,
}

impl FilterDefinition {
    const fn numeric(name: &'static str, kind: ValueKind, min: f64, max: f64) -> Self {
        Self {
            name,
            kind,
            range: Some(Range::new(min, max)),
            placeholder: None,
        }
    }

    const fn text(name: &'static str, placeholder: &'static str) -> Self {
        Self {
            name,
            kind: ValueKind::FreeText,
            range: None,
            placeholder: Some(placeholder),
        }
    }

    pub const fn unit(&self) -> &'static str {
        self.kind.unit()
    }

    /// The raw value a freshly added filter of this kind starts with.
    ///
    /// Numeric kinds start at their lower bound (or zero), free text starts empty.
    pub fn default_raw_value(&self) -> String {
        match self.range {
            Some(range) if range.min.is_finite() && range.min != 0.0 => {
                format!("{}{}", range.min, self.unit())
            }
            Some(_) => format!("0{}", self.unit()),
            None => String::new(),
        }
    }
}

/// Every filter function the editor knows about, in display order.
pub const CATALOG: &[FilterDefinition] = &[
    FilterDefinition::numeric("blur", ValueKind::Length, 0.0, f64::INFINITY),
    FilterDefinition::numeric("brightness", ValueKind::Percentage, 0.0, f64::INFINITY),
    FilterDefinition::numeric("contrast", ValueKind::Percentage, 0.0, f64::INFINITY),
    FilterDefinition::text("drop-shadow", "x y radius color"),
    FilterDefinition::numeric("grayscale", ValueKind::Percentage, 0.0, 100.0),
    FilterDefinition::numeric("hue-rotate", ValueKind::Angle, 0.0, 360.0),
    FilterDefinition::numeric("invert", ValueKind::Percentage, 0.0, 100.0),
    FilterDefinition::numeric("opacity", ValueKind::Percentage, 0.0, 100.0),
    FilterDefinition::numeric("saturate", ValueKind::Percentage, 0.0, f64::INFINITY),
    FilterDefinition::numeric("sepia", ValueKind::Percentage, 0.0, 100.0),
    FilterDefinition::text("url", "example.svg#c1"),
];

static BY_NAME: Lazy<HashMap<&'static str, &'static FilterDefinition>> =
    Lazy::new(|| CATALOG.iter().map(|def| (def.name, def)).collect());

/// Look up a filter definition by name. Names are ASCII case-insensitive.
pub fn lookup(name: &str) -> Option<&'static FilterDefinition> {
    if let Some(def) = BY_NAME.get(name) {
        return Some(*def);
    }
    BY_NAME.get(name.to_ascii_lowercase().as_str()).copied()
}

/// All catalog names, in display order.
pub fn names() -> impl Iterator<Item = &'static str> {
    CATALOG.iter().map(|def| def.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_eleven_unique_entries() {
        assert_eq!(CATALOG.len(), 11);
        let unique: HashSet<_> = names().collect();
        assert_eq!(unique.len(), CATALOG.len());
    }

    #[test]
    fn lookup_known_and_unknown() {
        assert_eq!(lookup("blur").unwrap().kind, ValueKind::Length);
        assert_eq!(lookup("hue-rotate").unwrap().unit(), "deg");
        assert!(lookup("sharpen").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn lookup_ignores_ascii_case() {
        assert_eq!(lookup("BLUR").unwrap().name, "blur");
        assert_eq!(lookup("Drop-Shadow").unwrap().name, "drop-shadow");
    }

    #[test]
    fn bounded_percentages_cap_at_100() {
        for name in ["grayscale", "invert", "opacity", "sepia"] {
            let def = lookup(name).unwrap();
            assert_eq!(def.kind, ValueKind::Percentage);
            assert_eq!(def.range, Some(Range::new(0.0, 100.0)));
        }
    }

    #[test]
    fn unbounded_kinds_have_infinite_max() {
        for name in ["blur", "brightness", "contrast", "saturate"] {
            let range = lookup(name).unwrap().range.unwrap();
            assert!(!range.is_bounded_above());
            assert_eq!(range.min, 0.0);
        }
    }

    #[test]
    fn free_text_kinds_have_placeholders_and_no_range() {
        let shadow = lookup("drop-shadow").unwrap();
        assert_eq!(shadow.kind, ValueKind::FreeText);
        assert_eq!(shadow.placeholder, Some("x y radius color"));
        assert!(shadow.range.is_none());
        assert_eq!(lookup("url").unwrap().placeholder, Some("example.svg#c1"));
    }

    #[test]
    fn range_clamp_applies_both_bounds() {
        let range = Range::new(0.0, 360.0);
        assert_eq!(range.clamp(-10.0), 0.0);
        assert_eq!(range.clamp(400.0), 360.0);
        assert_eq!(range.clamp(90.5), 90.5);
        assert_eq!(Range::new(0.0, f64::INFINITY).clamp(1e9), 1e9);
    }

    #[test]
    fn default_raw_values() {
        assert_eq!(lookup("blur").unwrap().default_raw_value(), "0px");
        assert_eq!(lookup("sepia").unwrap().default_raw_value(), "0%");
        assert_eq!(lookup("hue-rotate").unwrap().default_raw_value(), "0deg");
        assert_eq!(lookup("url").unwrap().default_raw_value(), "");
    }
}
