use crate::model::Gender;
use crate::syntax::Line;

/// Interpret a `SEX` line. `M` and `F` map to male and female, anything else
/// (including no value) to unknown.
pub fn interpret_sex(line: &Line) -> Gender {
    let gender = Gender::from_letter(line.value());
    if gender.is_unknown() && !line.value().is_empty() {
        tracing::debug!(line = line.raw(), "unrecognized sex value");
    }
    gender
}
