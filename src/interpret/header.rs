use crate::base::constants::tags;
use crate::error::StructureError;
use crate::model::{Header, Submitter};
use crate::syntax::{Line, children};

use super::kind::HeaderTag;
use super::{child_head, tagged_root};

/// Interpret the `HEAD` record.
pub fn interpret_header(lines: &[Line]) -> Result<Header, StructureError> {
    tagged_root(lines, "HEAD", tags::HEAD)?;
    let mut header = Header::default();

    for child in children(lines) {
        let Some((line, tag)) = child_head(child) else {
            continue;
        };
        let value = Some(line.value().to_string()).filter(|v| !v.is_empty());
        match HeaderTag::from_tag(tag) {
            HeaderTag::Source => header.source = value,
            HeaderTag::Charset => header.charset = value,
            HeaderTag::Submitter => header.submitter_id = value,
            HeaderTag::Other => {}
        }
    }

    Ok(header)
}

/// Interpret a `SUBM` record.
pub fn interpret_submitter(lines: &[Line]) -> Result<Submitter, StructureError> {
    let head = tagged_root(lines, "SUBM", tags::SUBM)?;
    let id = head.xref_id().ok_or_else(|| StructureError::MissingId {
        tag: tags::SUBM,
        line: head.raw().to_string(),
    })?;
    let mut submitter = Submitter {
        id: id.to_string(),
        ..Submitter::default()
    };

    for child in children(lines) {
        if let Some((line, tags::NAME)) = child_head(child) {
            submitter.name = line.value().to_string();
        }
    }

    Ok(submitter)
}
