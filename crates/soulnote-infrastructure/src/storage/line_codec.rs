//! Escaped, pipe-delimited record lines.
//!
//! A record is a list of fields joined by ` | `. Inside a field the
//! characters `\`, `|`, `,`, newline and carriage return are escaped, so the
//! separators stay unambiguous whatever the user typed. Lines written before
//! escaping existed still decode as long as their text holds no separator.

use chrono::NaiveDateTime;
use soulnote_core::error::SoulnoteError;

pub const FIELD_SEPARATOR: &str = " | ";
pub const LIST_SEPARATOR: &str = ", ";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Why a log line could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    FieldCount { expected: usize, found: usize },
    MissingLabel(&'static str),
    InvalidEscape(String),
    InvalidTimestamp(String),
    InvalidUserId(String),
    InvalidValue(String),
}

impl std::fmt::Display for LineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LineError::FieldCount { expected, found } => {
                write!(f, "expected {} fields, found {}", expected, found)
            }
            LineError::MissingLabel(label) => write!(f, "missing field label '{}'", label),
            LineError::InvalidEscape(e) => write!(f, "invalid escape sequence: {}", e),
            LineError::InvalidTimestamp(e) => write!(f, "invalid timestamp: {}", e),
            LineError::InvalidUserId(e) => write!(f, "invalid user id: {}", e),
            LineError::InvalidValue(e) => write!(f, "invalid value: {}", e),
        }
    }
}

impl std::error::Error for LineError {}

impl From<LineError> for SoulnoteError {
    fn from(e: LineError) -> Self {
        SoulnoteError::serialization("log line", e.to_string())
    }
}

/// Escapes a free-text value for use inside a field.
pub fn escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '|' => escaped.push_str("\\|"),
            ',' => escaped.push_str("\\,"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// Reverses [`escape`].
pub fn unescape(raw: &str) -> Result<String, LineError> {
    let mut value = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            value.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => value.push('\\'),
            Some('|') => value.push('|'),
            Some(',') => value.push(','),
            Some('n') => value.push('\n'),
            Some('r') => value.push('\r'),
            Some(other) => return Err(LineError::InvalidEscape(format!("\\{}", other))),
            None => return Err(LineError::InvalidEscape("trailing backslash".to_string())),
        }
    }
    Ok(value)
}

/// Joins already escaped fields into one line.
pub fn join_fields(fields: &[String]) -> String {
    fields.join(FIELD_SEPARATOR)
}

/// Escapes and joins list items such as tags.
pub fn join_list<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| escape(item.as_ref()))
        .collect::<Vec<_>>()
        .join(LIST_SEPARATOR)
}

/// Splits a line into raw (still escaped) fields and checks their count.
pub fn split_fields(line: &str, expected: usize) -> Result<Vec<&str>, LineError> {
    let pieces = split_unescaped(line, '|');
    let last = pieces.len().saturating_sub(1);
    let fields: Vec<&str> = pieces
        .into_iter()
        .enumerate()
        .map(|(index, piece)| {
            let piece = if index > 0 {
                piece.strip_prefix(' ').unwrap_or(piece)
            } else {
                piece
            };
            if index < last {
                piece.strip_suffix(' ').unwrap_or(piece)
            } else {
                piece
            }
        })
        .collect();

    if fields.len() != expected {
        return Err(LineError::FieldCount {
            expected,
            found: fields.len(),
        });
    }
    Ok(fields)
}

/// Splits and unescapes a raw list value. An empty value is an empty list.
pub fn split_list(raw: &str) -> Result<Vec<String>, LineError> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }
    split_unescaped(raw, ',')
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            let item = if index > 0 {
                item.strip_prefix(' ').unwrap_or(item)
            } else {
                item
            };
            unescape(item)
        })
        .collect()
}

/// Writes `label:` followed by ` value` when a value is present.
pub fn labeled(label: &str, value: Option<&str>) -> String {
    match value {
        Some(value) => format!("{}: {}", label, value),
        None => format!("{}:", label),
    }
}

/// Strips `label:` from a raw field and returns the raw value after it.
///
/// `None` means the field carried the bare label.
pub fn strip_label<'a>(field: &'a str, label: &'static str) -> Result<Option<&'a str>, LineError> {
    let rest = field
        .strip_prefix(label)
        .and_then(|rest| rest.strip_prefix(':'))
        .ok_or(LineError::MissingLabel(label))?;
    if rest.is_empty() {
        return Ok(None);
    }
    Ok(Some(rest.strip_prefix(' ').unwrap_or(rest)))
}

pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, LineError> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .map_err(|e| LineError::InvalidTimestamp(format!("{} ({})", raw, e)))
}

fn split_unescaped(raw: &str, delimiter: char) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut escaped = false;
    for (index, c) in raw.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == delimiter {
            pieces.push(&raw[start..index]);
            start = index + c.len_utf8();
        }
    }
    pieces.push(&raw[start..]);
    pieces
}
