//! Tokenizer for CSS `filter` values.
//!
//! Turns `blur(2px) url(a.svg#f)` into an ordered list of `(name, value)`
//! tokens by scanning once and counting parenthesis depth. A function name is
//! whatever precedes the first `(` at depth 0, and its value is everything up
//! to the matching `)`, with any nested parentheses passed through literally.
//!
//! Only the function-call grammar of the `filter` property is understood;
//! names are not checked against the catalog here.

use crate::error::ParseError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub name: String,
    pub value: String,
}

impl Token {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Tokenizes a filter value.
///
/// `none`, the empty string and whitespace-only input yield no tokens.
/// Unbalanced parentheses, a `(` with no name before it, or a bare word that
/// never opens a function are errors; no partial result is returned.
pub fn tokenize(input: &str) -> Result<Vec<Token>, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed == "none" {
        return Ok(Vec::new());
    }

    let mut tokens = Vec::new();
    let mut depth = 0usize;
    let mut name = String::new();
    let mut name_start = 0;
    let mut name_ended = false;
    let mut value = String::new();
    let mut open_at = 0;

    for (offset, ch) in input.char_indices() {
        if depth == 0 {
            match ch {
                '(' => {
                    if name.is_empty() {
                        return Err(ParseError::EmptyName(offset));
                    }
                    depth = 1;
                    open_at = offset;
                }
                ')' => return Err(ParseError::UnexpectedClose(offset)),
                c if c.is_whitespace() => {
                    if !name.is_empty() {
                        name_ended = true;
                    }
                }
                c => {
                    if name_ended {
                        return Err(ParseError::StrayText {
                            offset: name_start,
                            text: name,
                        });
                    }
                    if name.is_empty() {
                        name_start = offset;
                    }
                    name.push(c);
                }
            }
            continue;
        }

        match ch {
            '(' => {
                depth += 1;
                value.push(ch);
            }
            ')' => {
                depth -= 1;
                if depth == 0 {
                    tokens.push(Token {
                        name: std::mem::take(&mut name),
                        value: value.trim().to_string(),
                    });
                    value.clear();
                    name_ended = false;
                } else {
                    value.push(ch);
                }
            }
            c => value.push(c),
        }
    }

    if depth > 0 {
        return Err(ParseError::Unclosed(open_at));
    }
    if !name.is_empty() {
        return Err(ParseError::StrayText {
            offset: name_start,
            text: name,
        });
    }

    Ok(tokens)
}
