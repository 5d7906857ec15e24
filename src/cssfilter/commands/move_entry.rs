use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::gesture::drag_destination;
use crate::index::{resolve_index, DisplayIndex};
use crate::list::FilterList;

/// Moves the entry at `index` so it ends up at display position `destination`.
pub fn run(list: &mut FilterList, index: DisplayIndex, destination: DisplayIndex) -> Result<CmdResult> {
    let id = resolve_index(list, index)?;
    let landed = list.move_to(id, destination.position())?;

    let mut result = CmdResult::default().with_css(list);
    let landed = DisplayIndex::from_position(landed);
    if landed == index {
        result.add_message(CmdMessage::info(format!("Filter {} is already there", index)));
    } else {
        result.add_message(CmdMessage::success(format!(
            "Filter moved ({} -> {})",
            index, landed
        )));
    }
    Ok(result)
}

/// Moves the entry at `index` by a vertical drag of `pixel_delta` pixels.
pub fn drag(list: &mut FilterList, index: DisplayIndex, pixel_delta: f64, row_height: f64) -> Result<CmdResult> {
    let id = resolve_index(list, index)?;
    match drag_destination(index.position(), pixel_delta, row_height, list.len()) {
        Some(destination) => run(list, index, DisplayIndex::from_position(destination)),
        None => {
            let mut result = CmdResult::default().with_css(list);
            result.add_message(CmdMessage::info(format!(
                "Filter {} stays in place ({} px with {} px rows)",
                index, pixel_delta, row_height
            )));
            tracing::debug!(%id, pixel_delta, "row drag did not cross a row");
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn idx(n: usize) -> DisplayIndex {
        DisplayIndex::new(n).unwrap()
    }

    #[test]
    fn moves_to_destination() {
        let mut list = FilterList::from_css("blur(1px) sepia(5%) invert(10%)").unwrap();
        let result = run(&mut list, idx(3), idx(1)).unwrap();
        assert_eq!(result.css.as_deref(), Some("invert(10%) blur(1px) sepia(5%)"));
        assert_eq!(result.messages[0].content, "Filter moved (3 -> 1)");
    }

    #[test]
    fn destination_past_end_is_clamped() {
        let mut list = FilterList::from_css("blur(1px) sepia(5%)").unwrap();
        let result = run(&mut list, idx(1), idx(9)).unwrap();
        assert_eq!(result.css.as_deref(), Some("sepia(5%) blur(1px)"));
        assert_eq!(result.messages[0].content, "Filter moved (1 -> 2)");
    }

    #[test]
    fn drag_by_rows() {
        let mut list = FilterList::from_css("blur(1px) sepia(5%) invert(10%)").unwrap();
        let result = drag(&mut list, idx(1), 70.0, 32.0).unwrap();
        assert_eq!(result.css.as_deref(), Some("sepia(5%) invert(10%) blur(1px)"));
    }

    #[test]
    fn short_drag_is_a_no_op() {
        let mut list = FilterList::from_css("blur(1px) sepia(5%)").unwrap();
        let result = drag(&mut list, idx(2), -10.0, 32.0).unwrap();
        assert_eq!(result.css.as_deref(), Some("blur(1px) sepia(5%)"));
        assert!(result.messages[0].content.contains("stays in place"));
    }

    #[test]
    fn unknown_index_fails() {
        let mut list = FilterList::from_css("blur(1px)").unwrap();
        assert!(run(&mut list, idx(2), idx(1)).is_err());
        assert!(drag(&mut list, idx(2), 40.0, 32.0).is_err());
    }
}
