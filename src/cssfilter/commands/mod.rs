//! # Command Layer
//!
//! One module per user-facing operation. Each `run` takes the list (and any
//! settings it needs) as plain arguments and returns a [`CmdResult`]; nothing
//! here prints, reads the terminal, or touches the process.

use crate::catalog::FilterDefinition;
use crate::config::EditorConfig;
use crate::list::FilterList;
use crate::model::EntryView;

pub mod add;
pub mod config;
pub mod kinds;
pub mod move_entry;
pub mod nudge;
pub mod remove;
pub mod show;
pub mod update;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// The serialized list after the command, for commands that touch a list
    pub css: Option<String>,
    pub listed: Vec<EntryView>,
    pub kinds: Vec<&'static FilterDefinition>,
    pub config: Option<EditorConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_css(mut self, list: &FilterList) -> Self {
        self.css = Some(list.to_css());
        self
    }

    pub fn with_listed(mut self, entries: Vec<EntryView>) -> Self {
        self.listed = entries;
        self
    }

    pub fn with_kinds(mut self, kinds: Vec<&'static FilterDefinition>) -> Self {
        self.kinds = kinds;
        self
    }

    pub fn with_config(mut self, config: EditorConfig) -> Self {
        self.config = Some(config);
        self
    }
}
