//! Line tokenizer.
//!
//! A line of the notation has the shape
//!
//! ```text
//! <level> [@<xref>@] <TAG> [<value ...>]
//! ```
//!
//! [`Line`] keeps the raw text and derives its fields on first access. Each
//! derived field lives in a write-once cell, so repeated reads are free and a
//! `Line` stays an immutable value from the outside.

use std::cell::OnceCell;
use std::fmt;

use crate::base::escape_ascii;
use crate::error::LineError;

/// Fields that come from the tokens after the level.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Tokens {
    xref_id: Option<String>,
    tag: Option<String>,
    value: String,
}

/// One tokenized line.
#[derive(Clone)]
pub struct Line {
    raw: String,
    level: OnceCell<Result<u8, LineError>>,
    tokens: OnceCell<Tokens>,
}

impl Line {
    pub fn new(raw: impl Into<String>) -> Self {
        Self {
            raw: raw.into(),
            level: OnceCell::new(),
            tokens: OnceCell::new(),
        }
    }

    /// The line exactly as read.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Nesting level of the line.
    pub fn level(&self) -> Result<u8, LineError> {
        self.level
            .get_or_init(|| {
                self.raw
                    .split_whitespace()
                    .next()
                    .and_then(|token| token.parse::<u8>().ok())
                    .ok_or_else(|| LineError::MalformedLevel {
                        line: self.raw.clone(),
                    })
            })
            .clone()
    }

    /// Cross-reference id, present when the second token starts with `@`.
    /// Escaped like [`Line::value`], so an id compares equal to the value
    /// of a line that points at it.
    pub fn xref_id(&self) -> Option<&str> {
        self.tokens().xref_id.as_deref()
    }

    /// Tag of the line.
    pub fn tag(&self) -> Result<&str, LineError> {
        self.tokens()
            .tag
            .as_deref()
            .ok_or_else(|| LineError::MissingTag {
                line: self.raw.clone(),
            })
    }

    /// Remaining tokens after the tag, joined by single spaces and escaped
    /// to ASCII. Empty when the line carries no value.
    pub fn value(&self) -> &str {
        &self.tokens().value
    }

    fn tokens(&self) -> &Tokens {
        self.tokens.get_or_init(|| tokenize(&self.raw))
    }
}

fn tokenize(raw: &str) -> Tokens {
    let mut parts = raw.split_whitespace().skip(1);
    let (xref_id, tag) = match parts.next() {
        Some(second) if second.starts_with('@') => {
            (Some(escape_ascii(second).into_owned()), parts.next())
        }
        second => (None, second),
    };
    let value = parts.collect::<Vec<_>>().join(" ");
    Tokens {
        xref_id,
        tag: tag.map(str::to_string),
        value: escape_ascii(&value).into_owned(),
    }
}

impl fmt::Debug for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Line").field(&self.raw).finish()
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl PartialEq for Line {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Line {}

/// Write one line in the notation's exact framing, including the newline.
///
/// An empty `value` is omitted together with its separating space.
pub fn write_line(
    out: &mut String,
    level: u8,
    xref_id: Option<&str>,
    tag: &str,
    value: &str,
) {
    use std::fmt::Write;

    // Writing to a String cannot fail.
    let _ = write!(out, "{level}");
    if let Some(id) = xref_id {
        let _ = write!(out, " {id}");
    }
    let _ = write!(out, " {tag}");
    if !value.is_empty() {
        let _ = write!(out, " {value}");
    }
    out.push('\n');
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINES: [&str; 7] = [
        "0 HEAD",
        "0 @1@ INDI",
        "1 NAME Robert Eugene/Williams/",
        "1 SEX M",
        "1 BIRT",
        "2 DATE 02 OCT 1822",
        "1 FAMC @4@",
    ];

    #[test]
    fn test_levels() {
        let levels: Vec<u8> = LINES
            .iter()
            .map(|raw| Line::new(*raw).level().unwrap())
            .collect();
        assert_eq!(levels, vec![0, 0, 1, 1, 1, 2, 1]);
    }

    #[test]
    fn test_xref_ids() {
        let ids: Vec<Option<String>> = LINES
            .iter()
            .map(|raw| Line::new(*raw).xref_id().map(str::to_string))
            .collect();
        assert_eq!(ids[1].as_deref(), Some("@1@"));
        assert!(ids.iter().enumerate().all(|(i, id)| i == 1 || id.is_none()));
    }

    #[test]
    fn test_tags() {
        let tags: Vec<String> = LINES
            .iter()
            .map(|raw| Line::new(*raw).tag().unwrap().to_string())
            .collect();
        assert_eq!(tags, vec!["HEAD", "INDI", "NAME", "SEX", "BIRT", "DATE", "FAMC"]);
    }

    #[test]
    fn test_values() {
        let values: Vec<String> = LINES
            .iter()
            .map(|raw| Line::new(*raw).value().to_string())
            .collect();
        assert_eq!(
            values,
            vec![
                "",
                "",
                "Robert Eugene/Williams/",
                "M",
                "",
                "02 OCT 1822",
                "@4@"
            ]
        );
    }

    #[test]
    fn test_value_whitespace_is_collapsed() {
        let line = Line::new("1   NAME  John   /Doe/  ");
        assert_eq!(line.level(), Ok(1));
        assert_eq!(line.tag(), Ok("NAME"));
        assert_eq!(line.value(), "John /Doe/");
    }

    #[test]
    fn test_value_is_escaped() {
        let line = Line::new("2 PLAC Köln");
        assert_eq!(line.value(), "K\\u{f6}ln");
    }

    #[test]
    fn test_xref_id_and_pointer_value_agree() {
        let record = Line::new("0 @Ï1@ INDI");
        let pointer = Line::new("1 HUSB @Ï1@");
        assert_eq!(record.xref_id(), Some("@\\u{cf}1@"));
        assert_eq!(record.xref_id(), Some(pointer.value()));
    }

    #[test]
    fn test_malformed_level() {
        let line = Line::new("X NAME John");
        assert!(matches!(line.level(), Err(LineError::MalformedLevel { .. })));
        assert!(matches!(Line::new("").level(), Err(LineError::MalformedLevel { .. })));
        assert!(matches!(Line::new("-1 NAME").level(), Err(LineError::MalformedLevel { .. })));
        // Tag is still readable on its own.
        assert_eq!(line.tag(), Ok("NAME"));
    }

    #[test]
    fn test_missing_tag() {
        assert!(matches!(Line::new("0").tag(), Err(LineError::MissingTag { .. })));
        let line = Line::new("0 @I1@");
        assert_eq!(line.xref_id(), Some("@I1@"));
        assert!(matches!(line.tag(), Err(LineError::MissingTag { .. })));
    }

    #[test]
    fn test_memoized_reads_are_stable() {
        let line = Line::new("0 @I1@ INDI");
        assert_eq!(line.tag(), line.tag());
        assert_eq!(line.level(), line.level());
        assert_eq!(line.xref_id(), Some("@I1@"));
    }

    #[test]
    fn test_write_line_framing() {
        let mut out = String::new();
        write_line(&mut out, 0, Some("@I1@"), "INDI", "");
        write_line(&mut out, 1, None, "NAME", "John /Doe/");
        write_line(&mut out, 0, None, "TRLR", "");
        assert_eq!(out, "0 @I1@ INDI\n1 NAME John /Doe/\n0 TRLR\n");
    }
}
