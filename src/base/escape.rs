//! Reversible ASCII-safe escaping of line values.
//!
//! Values are escaped once, when a line is tokenized, so that every
//! comparison and every hand-off between worker threads deals with plain
//! ASCII. The reverse transform runs once more at output time.
//!
//! ```text
//! \        → \\
//! ö (U+F6) → \u{f6}
//! ```
//!
//! Escaping an ASCII string without backslashes is the identity.

use std::borrow::Cow;
use std::fmt::Write;

use thiserror::Error;

/// Failure to reverse [`escape_ascii`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EscapeError {
    #[error("dangling backslash at byte {0}")]
    DanglingBackslash(usize),

    #[error("unknown escape sequence '\\{found}' at byte {offset}")]
    UnknownSequence { offset: usize, found: char },

    #[error("malformed unicode escape at byte {0}")]
    MalformedUnicode(usize),

    #[error("escape at byte {offset} is not a unicode scalar value: {code:#x}")]
    InvalidScalar { offset: usize, code: u32 },
}

/// Escape a value to its ASCII-safe canonical form.
pub fn escape_ascii(input: &str) -> Cow<'_, str> {
    if input.bytes().all(|b| b.is_ascii() && b != b'\\') {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            c if c.is_ascii() => out.push(c),
            c => {
                // Writing to a String cannot fail.
                let _ = write!(out, "\\u{{{:x}}}", c as u32);
            }
        }
    }
    Cow::Owned(out)
}

/// Reverse [`escape_ascii`].
pub fn unescape(input: &str) -> Result<Cow<'_, str>, EscapeError> {
    if !input.contains('\\') {
        return Ok(Cow::Borrowed(input));
    }

    let mut out = String::with_capacity(input.len());
    let mut chars = input.char_indices().peekable();
    while let Some((offset, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            None => return Err(EscapeError::DanglingBackslash(offset)),
            Some((_, '\\')) => out.push('\\'),
            Some((_, 'u')) => {
                if !matches!(chars.next(), Some((_, '{'))) {
                    return Err(EscapeError::MalformedUnicode(offset));
                }
                let mut hex = String::new();
                loop {
                    match chars.next() {
                        Some((_, '}')) => break,
                        Some((_, h)) if h.is_ascii_hexdigit() && hex.len() < 6 => hex.push(h),
                        _ => return Err(EscapeError::MalformedUnicode(offset)),
                    }
                }
                let code = u32::from_str_radix(&hex, 16)
                    .map_err(|_| EscapeError::MalformedUnicode(offset))?;
                let decoded =
                    char::from_u32(code).ok_or(EscapeError::InvalidScalar { offset, code })?;
                out.push(decoded);
            }
            Some((_, found)) => return Err(EscapeError::UnknownSequence { offset, found }),
        }
    }
    Ok(Cow::Owned(out))
}

/// Unescape a field for output, keeping the escaped form if that fails.
pub fn decode_or_keep<'a>(field: &'static str, input: &'a str) -> Cow<'a, str> {
    match unescape(input) {
        Ok(decoded) => decoded,
        Err(e) => {
            tracing::warn!(field, value = input, error = %e, "keeping escaped form");
            Cow::Borrowed(input)
        }
    }
}
