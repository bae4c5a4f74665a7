use crate::base::constants::primary_from_value;
use crate::error::StructureError;
use crate::model::Name;
use crate::syntax::{Line, children};

use super::kind::NameTag;
use super::{child_head, root};

/// Interpret a `NAME` structure.
///
/// The inline value `Given Names /Surname/` is read first; `GIVN` and `SURN`
/// children override the respective part. Returns `Ok(None)` when both parts
/// end up blank, since empty names are never stored.
pub fn interpret_name(lines: &[Line]) -> Result<Option<Name>, StructureError> {
    let head = root(lines, "NAME")?;
    let mut name = Name::default();

    let value = head.value();
    let mut parts = value.split('/');
    name.given_name = parts.next().unwrap_or_default().trim().to_string();
    name.surname = parts.next().unwrap_or_default().trim().to_string();

    for child in children(lines) {
        let Some((line, tag)) = child_head(child) else {
            continue;
        };
        match NameTag::from_tag(tag) {
            NameTag::Given => name.given_name = line.value().to_string(),
            NameTag::Surname => name.surname = line.value().to_string(),
            NameTag::Primary => match primary_from_value(line.value()) {
                Some(primary) => name.primary = primary,
                None => tracing::warn!(line = line.raw(), "unrecognized _PRIM value"),
            },
            NameTag::Other => {}
        }
    }

    if name.is_empty() {
        tracing::debug!(line = head.raw(), "discarding empty name");
        return Ok(None);
    }
    Ok(Some(name))
}
