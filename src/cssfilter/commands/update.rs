use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::{resolve_index, DisplayIndex};
use crate::list::FilterList;

pub fn run(list: &mut FilterList, index: DisplayIndex, raw: &str) -> Result<CmdResult> {
    let id = resolve_index(list, index)?;
    list.update(id, raw)?;

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
