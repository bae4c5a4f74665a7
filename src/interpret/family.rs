use crate::base::constants::tags;
use crate::error::StructureError;
use crate::model::Family;
use crate::syntax::{Line, children};

use super::kind::FamilyTag;
use super::{child_head, tagged_root};

/// Interpret a `FAM` record. Child order is kept as read.
pub fn interpret_family(lines: &[Line]) -> Result<Family, StructureError> {
    let head = tagged_root(lines, "FAM", tags::FAM)?;
    let id = head.xref_id().ok_or_else(|| StructureError::MissingId {
        tag: tags::FAM,
        line: head.raw().to_string(),
    })?;
    let mut family = Family::new(id);

    for child in children(lines) {
        let Some((line, tag)) = child_head(child) else {
            continue;
        };
        let value = line.value();
        let kind = FamilyTag::from_tag(tag);
        if value.is_empty() && kind != FamilyTag::Other {
            tracing::warn!(id, line = line.raw(), "reference without value");
            continue;
        }
        match kind {
            FamilyTag::Husband => family.father_id = Some(value.to_string()),
            FamilyTag::Wife => family.mother_id = Some(value.to_string()),
            FamilyTag::Child => family.child_ids.push(value.to_string()),
            FamilyTag::Other => {}
        }
    }

    Ok(family)
}
