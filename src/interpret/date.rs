use crate::base::constants::month_from_abbreviation;
use crate::model::Date;

/// Interpret the value of a `DATE` line.
///
/// Tokens are read from the right: the last is the year, the one before it
/// the month abbreviation, the one before that the day. This handles
/// `YYYY`, `MON YYYY` and `DD MON YYYY` without guessing which token is
/// missing. An unknown month drops the month (and with it the day) but keeps
/// the year.
pub fn interpret_date(value: &str) -> Date {
    let tokens: Vec<&str> = value.split_whitespace().collect();
    if tokens.len() > 3 {
        tracing::debug!(value, "date has more than three tokens, reading the last three");
    }

    let mut from_right = tokens.iter().rev();
    let year = from_right.next().map(|y| y.to_string());
    let month = from_right.next().and_then(|m| {
        let month = month_from_abbreviation(m);
        if month.is_none() {
            tracing::debug!(value, month = *m, "unrecognized month");
        }
        month
    });
    let day = from_right.next().map(|d| d.to_string());

    Date::new(year, month, day)
}
