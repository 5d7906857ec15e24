//! # API Facade
//!
//! [`FilterApi`] is the single entry point UI clients use to edit a filter
//! value. It owns one [`FilterList`] plus the editor settings, and:
//!
//! - **Normalizes inputs**: display indexes ("2", "1-3") become entry ids
//! - **Dispatches** to the command layer
//! - **Notifies** a caller-supplied listener with the new CSS after every
//!   successful mutation. Failed calls never notify.
//!
//! It holds no business logic of its own; that lives in `commands/*.rs` and
//! the model modules.

use crate::commands;
use crate::config::EditorConfig;
use crate::error::Result;
use crate::gesture::DragModifier;
use crate::index::{parse_indexes, DisplayIndex};
use crate::list::FilterList;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

type ChangeListener = Box<dyn FnMut(&str)>;

/// One editing session over a single filter value.
pub struct FilterApi {
    list: FilterList,
    config: EditorConfig,
    listener: Option<ChangeListener>,
}

impl fmt::Debug for FilterApi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterApi")
            .field("list", &self.list)
            .field("config", &self.config)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl FilterApi {
    pub fn new(config: EditorConfig) -> Self {
        Self {
            list: FilterList::new(),
            config,
            listener: None,
        }
    }

    /// Registers the change listener, replacing any previous one.
    pub fn on_change(&mut self, listener: impl FnMut(&str) + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn list(&self) -> &FilterList {
        &self.list
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Replaces the list with the parsed `css`, honoring the configured
    /// unknown-kind policy. Skipped names come back as warnings.
    pub fn load_css(&mut self, css: &str) -> Result<commands::CmdResult> {
        let skipped = self.list.set_css_with(css, self.config.unknown_kinds)?;
        let mut result = commands::show::run(&self.list)?;
        for name in skipped {
            result.add_message(commands::CmdMessage::warning(format!(
                "Skipped unknown filter: {}",
                name
            )));
        }
        self.notify();
        Ok(result)
    }

    pub fn show(&self) -> Result<commands::CmdResult> {
        commands::show::run(&self.list)
    }

    pub fn add(&mut self, name: &str, value: Option<&str>) -> Result<commands::CmdResult> {
        let result = commands::add::run(&mut self.list, name, value)?;
        self.notify();
        Ok(result)
    }

    pub fn remove<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<commands::CmdResult> {
        let indexes = parse_indexes(indexes, self.list.len())?;
        let result = commands::remove::run(&mut self.list, &indexes)?;
        self.notify();
        Ok(result)
    }

    pub fn update(&mut self, index: &str, raw: &str) -> Result<commands::CmdResult> {
        let index = parse_index(index)?;
        let result = commands::update::run(&mut self.list, index, raw)?;
        self.notify();
        Ok(result)
    }

    pub fn move_entry(&mut self, index: &str, destination: &str) -> Result<commands::CmdResult> {
        let index = parse_index(index)?;
        let destination = parse_index(destination)?;
        let result = commands::move_entry::run(&mut self.list, index, destination)?;
        self.notify();
        Ok(result)
    }

    /// Reorders by a vertical drag of `pixel_delta` pixels.
    pub fn drag(&mut self, index: &str, pixel_delta: f64) -> Result<commands::CmdResult> {
        let index = parse_index(index)?;
        let before = self.list.ids();
        let result =
            commands::move_entry::drag(&mut self.list, index, pixel_delta, self.config.row_height)?;
        if self.list.ids() != before {
            self.notify();
        }
        Ok(result)
    }

    /// Adjusts a numeric value by a horizontal label drag of `pixel_delta` pixels.
    pub fn nudge(
        &mut self,
        index: &str,
        pixel_delta: f64,
        modifier: DragModifier,
    ) -> Result<commands::CmdResult> {
        let index = parse_index(index)?;
        let result = commands::nudge::run(
            &mut self.list,
            index,
            pixel_delta,
            modifier,
            &self.config.multipliers,
        )?;
        self.notify();
        Ok(result)
    }

    pub fn kinds(&self) -> Result<commands::CmdResult> {
        commands::kinds::run()
    }

    /// Runs a config action against `dir`. A successful set also applies to
    /// this session.
    pub fn configure(&mut self, dir: &Path, action: ConfigAction) -> Result<commands::CmdResult> {
        let result = commands::config::run(dir, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    pub fn to_css(&self) -> String {
        self.list.to_css()
    }

    fn notify(&mut self) {
        if let Some(listener) = self.listener.as_mut() {
            let css = self.list.to_css();
            listener(&css);
        }
    }
}

fn parse_index(input: &str) -> Result<DisplayIndex> {
    DisplayIndex::from_str(input).map_err(crate::error::FilterError::Api)
}

pub use crate::commands::config::ConfigAction;
pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilterError;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn api_with_log() -> (FilterApi, Rc<RefCell<Vec<String>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&log);
        let mut api = FilterApi::new(EditorConfig::default());
        api.on_change(move |css| sink.borrow_mut().push(css.to_string()));
        (api, log)
    }

    #[test]
    fn mutations_notify_with_new_css() {
        let (mut api, log) = api_with_log();
        api.load_css("blur(1px)").unwrap();
        api.add("sepia", Some("20%")).unwrap();
        api.update("1", "4px").unwrap();
        api.move_entry("2", "1").unwrap();
        api.remove(&["2"]).unwrap();

        assert_eq!(
            *log.borrow(),
            vec![
                "blur(1px)",
                "blur(1px) sepia(20%)",
                "blur(4px) sepia(20%)",
                "sepia(20%) blur(4px)",
                "sepia(20%)",
            ]
        );
    }

    #[test]
    fn failures_do_not_notify() {
        let (mut api, log) = api_with_log();
        api.load_css("blur(1px)").unwrap();
        assert!(api.add("sharpen", None).is_err());
        assert!(api.update("7", "1px").is_err());
        assert!(api.remove(&["x"]).is_err());
        assert!(api.load_css("blur(").is_err());
        assert_eq!(log.borrow().len(), 1);
        assert_eq!(api.to_css(), "blur(1px)");
    }

    #[test]
    fn drag_notifies_only_when_order_changes() {
        let (mut api, log) = api_with_log();
        api.load_css("blur(1px) sepia(2%)").unwrap();
        api.drag("1", 5.0).unwrap();
        assert_eq!(log.borrow().len(), 1);
        api.drag("1", 40.0).unwrap();
        assert_eq!(log.borrow().last().unwrap(), "sepia(2%) blur(1px)");
    }

    #[test]
    fn load_css_honors_skip_policy() {
        let mut config = EditorConfig::default();
        config.unknown_kinds = crate::list::UnknownKindPolicy::Skip;
        let mut api = FilterApi::new(config);
        let result = api.load_css("sharpen(1) blur(2px)").unwrap();
        assert_eq!(result.css.as_deref(), Some("blur(2px)"));
        assert_eq!(result.messages[0].level, MessageLevel::Warning);

        let mut strict = FilterApi::new(EditorConfig::default());
        assert!(matches!(
            strict.load_css("sharpen(1) blur(2px)"),
            Err(FilterError::UnknownFilterKind(_))
        ));
    }

    #[test]
    fn nudge_uses_configured_multipliers() {
        let mut config = EditorConfig::default();
        config.multipliers.fast = 2.0;
        let mut api = FilterApi::new(config);
        api.load_css("blur(10px)").unwrap();
        api.nudge("1", 5.0, DragModifier::Fast).unwrap();
        assert_eq!(api.to_css(), "blur(20px)");
    }

    #[test]
    fn configure_applies_to_session() {
        let temp = tempfile::tempdir().unwrap();
        let mut api = FilterApi::new(EditorConfig::default());
        api.configure(
            temp.path(),
            ConfigAction::Set("row-height".into(), "10".into()),
        )
        .unwrap();
        assert_eq!(api.config().row_height, 10.0);

        api.load_css("blur(1px) sepia(2%)").unwrap();
        api.drag("1", 12.0).unwrap();
        assert_eq!(api.to_css(), "sepia(2%) blur(1px)");
    }
}
