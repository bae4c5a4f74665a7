//! Foundation pieces shared by every other module.
//!
//! - [`constants`] - month abbreviations, `_PRIM` flag values, sex letters
//! - [`escape`] - reversible ASCII-safe escaping of line values
//!
//! This module has NO dependencies on other gedcom modules.

pub mod constants;
pub mod escape;

pub use escape::{EscapeError, decode_or_keep, escape_ascii, unescape};
