//! Partial dates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::base::constants::month_abbreviation;

/// A date where day and month may be missing.
///
/// Cardinality is right-anchored: a day is only kept together with a month,
/// and a month only together with a year. [`Date::new`] and deserialization
/// both drop fields that break this rule, so a `Date` can never hold a day
/// without a month.
///
/// Year and day are kept as the tokens that were read, so `"02 OCT 1822"`
/// formats back to exactly `"02 OCT 1822"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "DateParts")]
pub struct Date {
    #[serde(skip_serializing_if = "Option::is_none")]
    year: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    month: Option<u8>,
    #[serde(skip_serializing_if = "Option::is_none")]
    day: Option<String>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct DateParts {
    year: Option<String>,
    month: Option<u8>,
    day: Option<String>,
}

impl From<DateParts> for Date {
    fn from(parts: DateParts) -> Self {
        Date::new(parts.year, parts.month, parts.day)
    }
}

impl Date {
    /// Build a date, dropping fields that have no enclosing field.
    ///
    /// Blank tokens count as absent and months outside 1-12 are dropped.
    pub fn new(year: Option<String>, month: Option<u8>, day: Option<String>) -> Self {
        let year = year.filter(|y| !y.trim().is_empty());
        let month = month.filter(|m| (1..=12).contains(m) && year.is_some());
        let day = day.filter(|d| !d.trim().is_empty() && month.is_some());
        Self { year, month, day }
    }

    pub fn year_only(year: impl Into<String>) -> Self {
        Self::new(Some(year.into()), None, None)
    }

    pub fn year(&self) -> Option<&str> {
        self.year.as_deref()
    }

    pub fn month(&self) -> Option<u8> {
        self.month
    }

    pub fn day(&self) -> Option<&str> {
        self.day.as_deref()
    }

    /// Year and day tokens, for transforms that rewrite text in place.
    pub(crate) fn text_parts_mut(&mut self) -> impl Iterator<Item = &mut String> {
        self.year.iter_mut().chain(self.day.iter_mut())
    }

    /// No field present; equivalent to "no date".
    pub fn is_empty(&self) -> bool {
        self.year.is_none()
    }
}

/// Canonical `DAY MON YEAR`, `MON YEAR` or `YEAR` form; empty when no year.
impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(year) = &self.year else {
            return Ok(());
        };
        match (self.month.and_then(month_abbreviation), &self.day) {
            (Some(month), Some(day)) => write!(f, "{day} {month} {year}"),
            (Some(month), None) => write!(f, "{month} {year}"),
            _ => write!(f, "{year}"),
        }
    }
}
