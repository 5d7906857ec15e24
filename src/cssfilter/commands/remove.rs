use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{resolve_indexes, DisplayIndex};
use crate::list::FilterList;
use std::collections::HashSet;

pub fn run(list: &mut FilterList, indexes: &[DisplayIndex]) -> Result<CmdResult> {
    let mut resolved = resolve_indexes(list, indexes)?;
    let mut seen = HashSet::new();
    resolved.retain(|(_, id)| seen.insert(*id));
    let ids: Vec<_> = resolved.iter().map(|(_, id)| *id).collect();
    let removed = list.remove_many(&ids)?;

    let mut result = CmdResult::default().with_css(list);
    for ((display_index, _), entry) in resolved.iter().zip(removed.iter()) {
        result.add_message(CmdMessage::success(format!(
            "Filter removed ({}): {}",
            display_index,
            entry.to_css()
        )));
    }
    Ok(result)
}
