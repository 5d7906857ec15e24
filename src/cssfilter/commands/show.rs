use crate::commands::CmdResult;
use crate::error::Result;
use crate::list::FilterList;

pub fn run(list: &FilterList) -> Result<CmdResult> {
    Ok(CmdResult::default()
        .with_listed(list.entries())
        .with_css(list))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_entries_in_order() {
        let list = FilterList::from_css("sepia(5%) blur(2px)").unwrap();
        let result = run(&list).unwrap();
        assert_eq!(result.listed.len(), 2);
        assert_eq!(result.listed[0].name, "sepia");
        assert_eq!(result.listed[1].position, 1);
        assert_eq!(result.css.as_deref(), Some("sepia(5%) blur(2px)"));
    }

    #[test]
    fn empty_list_shows_none() {
        let result = run(&FilterList::new()).unwrap();
        assert!(result.listed.is_empty());
        assert_eq!(result.css.as_deref(), Some("none"));
    }
}
