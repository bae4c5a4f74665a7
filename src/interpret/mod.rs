//! Structure interpreters.
//!
//! One function per logical structure. Each takes the slice of lines that
//! make up the structure (introducing line first, see
//! [`crate::syntax::structure`]) and builds a typed value.
//!
//! Failure policy:
//! - an unreadable introducing line is a [`StructureError`]; the caller skips
//!   the whole structure
//! - an unreadable child line is logged and skipped; its siblings are still
//!   interpreted
//! - unknown tags are ignored
//!
//! None of these functions touch shared state, so any number of records can
//! be interpreted at once.

mod date;
mod event;
mod family;
mod header;
mod individual;
pub mod kind;
mod name;
mod sex;

pub use date::interpret_date;
pub use event::interpret_event;
pub use family::interpret_family;
pub use header::{interpret_header, interpret_submitter};
pub use individual::interpret_individual;
pub use kind::RecordKind;
pub use name::interpret_name;
pub use sex::interpret_sex;

use crate::error::StructureError;
use crate::model::{Family, Header, Individual, Submitter};
use crate::syntax::{Line, Record};

/// Result of interpreting one top-level record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interpreted {
    Header(Header),
    Individual(Individual),
    Family(Family),
    Submitter(Submitter),
    /// Trailer or a record with an unrecognized leading tag.
    Ignored,
}

/// Interpret one top-level record according to its leading tag.
pub fn interpret_record(record: &Record) -> Result<Interpreted, StructureError> {
    let lines = record.lines();
    let head = lines.first().ok_or(StructureError::Empty("record"))?;
    let tag = head.tag().map_err(|source| StructureError::UnreadableRoot {
        kind: "record",
        source,
    })?;

    Ok(match RecordKind::from_tag(tag) {
        RecordKind::Header => Interpreted::Header(interpret_header(lines)?),
        RecordKind::Individual => Interpreted::Individual(interpret_individual(lines)?),
        RecordKind::Family => Interpreted::Family(interpret_family(lines)?),
        RecordKind::Submitter => Interpreted::Submitter(interpret_submitter(lines)?),
        RecordKind::Trailer => Interpreted::Ignored,
        RecordKind::Other => {
            tracing::trace!(tag, "ignoring record");
            Interpreted::Ignored
        }
    })
}

/// Introducing line of a structure, checked to have a readable level.
fn root<'a>(lines: &'a [Line], kind: &'static str) -> Result<&'a Line, StructureError> {
    let head = lines.first().ok_or(StructureError::Empty(kind))?;
    head.level()
        .map_err(|source| StructureError::UnreadableRoot { kind, source })?;
    Ok(head)
}

/// Like [`root`], and also require the leading tag to be `expected`.
fn tagged_root<'a>(
    lines: &'a [Line],
    kind: &'static str,
    expected: &'static str,
) -> Result<&'a Line, StructureError> {
    let head = root(lines, kind)?;
    let tag = head
        .tag()
        .map_err(|source| StructureError::UnreadableRoot { kind, source })?;
    if tag != expected {
        return Err(StructureError::UnexpectedTag {
            expected,
            found: tag.to_string(),
        });
    }
    Ok(head)
}

/// Introducing line and tag of a child structure, or `None` (logged) when
/// the tag is missing.
fn child_head(child: &[Line]) -> Option<(&Line, &str)> {
    let head = child.first()?;
    match head.tag() {
        Ok(tag) => Some((head, tag)),
        Err(e) => {
            tracing::warn!(error = %e, "skipping structure");
            None
        }
    }
}
