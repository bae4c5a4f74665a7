use crate::base::constants::primary_from_value;
use crate::error::StructureError;
use crate::model::Event;
use crate::syntax::{Line, children};

use super::date::interpret_date;
use super::kind::EventTag;
use super::{child_head, root};

/// Interpret a `BIRT` or `DEAT` structure.
///
/// Missing children leave the field at its default; an event with no date
/// and no place is still an event.
pub fn interpret_event(lines: &[Line]) -> Result<Event, StructureError> {
    root(lines, "event")?;
    let mut event = Event::default();

    for child in children(lines) {
        let Some((line, tag)) = child_head(child) else {
            continue;
        };
        match EventTag::from_tag(tag) {
            EventTag::Date => event.date = interpret_date(line.value()),
            EventTag::Place => event.place = line.value().to_string(),
            EventTag::Primary => match primary_from_value(line.value()) {
                Some(primary) => event.primary = primary,
                None => tracing::warn!(line = line.raw(), "unrecognized _PRIM value"),
            },
            EventTag::Other => {}
        }
    }

    Ok(event)
}
