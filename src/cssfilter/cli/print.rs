use colored::Colorize;
use cssfilter::api::{CmdMessage, MessageLevel};
use cssfilter::catalog::FilterDefinition;
use cssfilter::config::{EditorConfig, CONFIG_KEYS};
use cssfilter::index::DisplayIndex;
use cssfilter::model::EntryView;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 80;
const INDEX_WIDTH: usize = 6;
const NAME_WIDTH: usize = 14;

/// Status messages go to stderr so stdout stays a clean filter value.
pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => eprintln!("{}", message.content.dimmed()),
            MessageLevel::Success => eprintln!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_css(css: &str) {
    println!("{}", css);
}

pub(super) fn print_entries(entries: &[EntryView]) {
    if entries.is_empty() {
        println!("No filters (none).");
        return;
    }

    for entry in entries {
        let idx_str = format!("{}. ", DisplayIndex::from_position(entry.position));
        let available = LINE_WIDTH.saturating_sub(INDEX_WIDTH + NAME_WIDTH);
        let value = truncate_to_width(&entry.css_value(), available);

        println!(
            "{:>width$}{:<name_width$}{}",
            idx_str.yellow(),
            entry.name.bold(),
            value,
            width = INDEX_WIDTH,
            name_width = NAME_WIDTH
        );
    }
}

pub(super) fn print_kinds(kinds: &[&FilterDefinition]) {
    for def in kinds {
        let detail = match (def.range, def.placeholder) {
            (Some(range), _) => {
                let max = if range.is_bounded_above() {
                    format!("{}{}]", range.max, def.unit())
                } else {
                    "∞)".to_string()
                };
                format!("[{}{}, {}", range.min, def.unit(), max)
            }
            (None, Some(placeholder)) => format!("\"{}\"", placeholder),
            (None, None) => String::new(),
        };
        let kind = format!("{:?}", def.kind).to_lowercase();
        println!(
            "  {:<name_width$}{:<12}{}",
            def.name.bold(),
            kind,
            detail.dimmed(),
            name_width = NAME_WIDTH
        );
    }
}

pub(super) fn print_config(config: &EditorConfig) {
    for key in CONFIG_KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
