use crate::base::constants::tags;
use crate::error::StructureError;
use crate::model::Individual;
use crate::syntax::{Line, children};

use super::kind::IndividualTag;
use super::{child_head, interpret_event, interpret_name, interpret_sex, tagged_root};

/// Interpret an `INDI` record.
///
/// Child structures that fail are logged and dropped; the individual is
/// still produced from whatever could be read.
pub fn interpret_individual(lines: &[Line]) -> Result<Individual, StructureError> {
    let head = tagged_root(lines, "INDI", tags::INDI)?;
    let id = head.xref_id().ok_or_else(|| StructureError::MissingId {
        tag: tags::INDI,
        line: head.raw().to_string(),
    })?;
    let mut individual = Individual::new(id);

    for child in children(lines) {
        let Some((line, tag)) = child_head(child) else {
            continue;
        };
        match IndividualTag::from_tag(tag) {
            IndividualTag::Name => match interpret_name(child) {
                Ok(Some(name)) => individual.names.push(name),
                Ok(None) => {}
                Err(e) => tracing::warn!(id, error = %e, "skipping name"),
            },
            IndividualTag::Sex => individual.gender = interpret_sex(line),
            IndividualTag::Birth => match interpret_event(child) {
                Ok(event) => individual.birth_events.push(event),
                Err(e) => tracing::warn!(id, error = %e, "skipping birth"),
            },
            IndividualTag::Death => match interpret_event(child) {
                Ok(event) => individual.death_events.push(event),
                Err(e) => tracing::warn!(id, error = %e, "skipping death"),
            },
            IndividualTag::Other => {}
        }
    }

    Ok(individual)
}
