use crate::coerce::format_number;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FilterError, Result};
use crate::gesture::{drag_to_value, DragModifier, Multipliers};
use crate::index::{resolve_index, DisplayIndex};
use crate::list::FilterList;

/// Adjusts a numeric entry as if its label were dragged `pixel_delta` pixels.
pub fn run(
    list: &mut FilterList,
    index: DisplayIndex,
    pixel_delta: f64,
    modifier: DragModifier,
    multipliers: &Multipliers,
) -> Result<CmdResult> {
    let id = resolve_index(list, index)?;
    let entry = list.get(id).ok_or(FilterError::UnknownEntry(id))?;
    let start = entry.value().as_number().ok_or_else(|| {
        FilterError::Api(format!(
            "Filter {} ({}) takes free text and cannot be nudged",
            index,
            entry.name()
        ))
    })?;

    let value = drag_to_value(
        start,
        pixel_delta,
        multipliers.for_modifier(modifier),
        entry.definition().range,
    );
    let raw = format!("{}{}", format_number(value), entry.unit());
    list.update(id, &raw)?;

    let mut result = CmdResult::default().with_css(list);
    if let Some(entry) = list.get(id) {
        result.add_message(CmdMessage::success(format!(
            "Filter updated ({}): {}",
            index,
            entry.to_css()
        )));
    }
    Ok(result)
}
