use crate::model::EntryId;
use thiserror::Error;

/// Tokenizer failures. Offsets are byte positions into the input string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("unexpected ')' at byte {0}")]
    UnexpectedClose(usize),

    #[error("unclosed '(' opened at byte {0}")]
    Unclosed(usize),

    #[error("missing filter name before '(' at byte {0}")]
    EmptyName(usize),

    #[error("unexpected text '{text}' at byte {offset}")]
    StrayText { offset: usize, text: String },
}

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Missing CSS filter value")]
    EmptyInput,

    #[error("Unknown filter kind: {0}")]
    UnknownFilterKind(String),

    #[error("Unknown entry: {0}")]
    UnknownEntry(EntryId),

    #[error("Invalid value for {name}: '{raw}'")]
    InvalidValue { name: String, raw: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, FilterError>;
