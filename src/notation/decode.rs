//! Moving a document between its stored, escaped text and real Unicode.
//!
//! Every document holds the tokenizer's escaped form in all text fields, no
//! matter which notation it was read from. Writers decode a copy; the
//! structured readers escape what they read.

use std::borrow::Cow;

use crate::base::{decode_or_keep, escape_ascii};
use crate::model::Document;

/// Copy of `document` with the escaping reversed on every text field.
///
/// A field that cannot be unescaped keeps its escaped form; the other fields
/// are unaffected.
pub fn decode_text_fields(document: &Document) -> Document {
    let mut decoded = document.clone();
    decoded.for_each_text_field_mut(|field, value| {
        let replacement = match decode_or_keep(field, value) {
            Cow::Owned(decoded) => Some(decoded),
            Cow::Borrowed(_) => None,
        };
        if let Some(replacement) = replacement {
            *value = replacement;
        }
    });
    decoded
}

/// Escape every text field in place, as the line tokenizer would have.
pub fn escape_text_fields(document: &mut Document) {
    document.for_each_text_field_mut(|_, value| {
        let replacement = match escape_ascii(value) {
            Cow::Owned(escaped) => Some(escaped),
            Cow::Borrowed(_) => None,
        };
        if let Some(replacement) = replacement {
            *value = replacement;
        }
    });
}
