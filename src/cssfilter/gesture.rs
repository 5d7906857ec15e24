//! Pointer-gesture arithmetic for editors built on top of the model.
//!
//! Two gestures drive the model from a pointer:
//!
//! - **Label drag** adjusts a numeric value by horizontal pixel distance,
//!   scaled by a multiplier chosen from held modifier keys.
//! - **Row drag** reorders an entry by vertical pixel distance measured in
//!   fixed-height rows.
//!
//! Everything here is a pure function of its inputs. Callers keep the gesture
//! state, feed pointer positions in, and pass the results to
//! [`FilterList::update`](crate::list::FilterList::update) or
//! [`FilterList::move_to`](crate::list::FilterList::move_to).

use crate::catalog::Range;
use crate::coerce::round_tenths;
use serde::{Deserialize, Serialize};

pub const DEFAULT_VALUE_MULTIPLIER: f64 = 1.0;
pub const SLOW_VALUE_MULTIPLIER: f64 = 0.1;
pub const FAST_VALUE_MULTIPLIER: f64 = 10.0;
pub const DEFAULT_ROW_HEIGHT: f64 = 32.0;

/// Modifier-key state during a label drag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DragModifier {
    #[default]
    None,
    Slow,
    Fast,
}

/// Multipliers applied for each [`DragModifier`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Multipliers {
    #[serde(default = "default_slow")]
    pub slow: f64,
    #[serde(default = "default_fast")]
    pub fast: f64,
}

fn default_slow() -> f64 {
    SLOW_VALUE_MULTIPLIER
}

fn default_fast() -> f64 {
    FAST_VALUE_MULTIPLIER
}

impl Default for Multipliers {
    fn default() -> Self {
        Self {
            slow: SLOW_VALUE_MULTIPLIER,
            fast: FAST_VALUE_MULTIPLIER,
        }
    }
}

impl Multipliers {
    pub fn for_modifier(&self, modifier: DragModifier) -> f64 {
        match modifier {
            DragModifier::None => DEFAULT_VALUE_MULTIPLIER,
            DragModifier::Slow => self.slow,
            DragModifier::Fast => self.fast,
        }
    }
}

/// The value reached by dragging `pixel_delta` pixels from `start`.
///
/// Clamped to `range` when given, rounded to one decimal place.
pub fn drag_to_value(start: f64, pixel_delta: f64, multiplier: f64, range: Option<Range>) -> f64 {
    let value = start + pixel_delta * multiplier;
    let value = match range {
        Some(range) => range.clamp(value),
        None => value,
    };
    round_tenths(value)
}

/// State of one label drag.
///
/// A modifier change mid-drag restarts the gesture from the current pointer
/// position and value, so the new multiplier only applies to further movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelDrag {
    pub start_x: f64,
    pub start_value: f64,
    pub multiplier: f64,
}

impl LabelDrag {
    pub fn begin(x: f64, value: f64, multiplier: f64) -> Self {
        Self {
            start_x: x,
            start_value: value,
            multiplier,
        }
    }

    /// The value for the pointer at `x`.
    pub fn value_at(&self, x: f64, range: Option<Range>) -> f64 {
        drag_to_value(self.start_value, x - self.start_x, self.multiplier, range)
    }

    /// Restarts the drag at `x` with `value` under a new multiplier.
    pub fn rebase(self, x: f64, value: f64, multiplier: f64) -> Self {
        Self::begin(x, value, multiplier)
    }
}

/// Destination index for a row dragged `pixel_delta` pixels from `index`.
///
/// Downward movement counts only whole rows; upward movement rounds to the
/// nearest row. Returns `None` when the drag has not crossed a row or would
/// leave the list.
pub fn drag_destination(index: usize, pixel_delta: f64, row_height: f64, len: usize) -> Option<usize> {
    if row_height <= 0.0 || !pixel_delta.is_finite() {
        return None;
    }
    let steps = pixel_delta / row_height;
    let steps = if steps > 0.0 {
        steps.floor()
    } else {
        // Half-way rounds toward zero when moving up.
        (steps + 0.5).floor()
    };
    if steps == 0.0 {
        return None;
    }
    let destination = index as f64 + steps;
    if destination < 0.0 || destination >= len as f64 {
        return None;
    }
    Some(destination as usize)
}
