use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::list::FilterList;

/// Appends a `name` filter. Without a value the kind's starting value is used.
pub fn run(list: &mut FilterList, name: &str, value: Option<&str>) -> Result<CmdResult> {
    let id = match value {
        Some(raw) => list.add(name, raw)?,
        None => list.add_default(name)?,
    };

    let mut result = CmdResult::default().with_css(list);
    if let (Some(position), Some(entry)) = (list.position(id), list.get(id)) {
        result.add_message(CmdMessage::success(format!(
            "Filter added ({}): {}",
            DisplayIndex::from_position(position),
            entry.to_css()
        )));
    }
    Ok(result)
}
