//! The record graph.
//!
//! ```text
//! Document
//! ├── header: Option<Header>
//! ├── individuals: Vec<Individual>
//! │   ├── names: Vec<Name>
//! │   ├── birth_events / death_events: Vec<Event { date: Date, .. }>
//! │   └── gender: Gender
//! ├── families: Vec<Family>      (father/mother/children by individual id)
//! └── submitters: Vec<Submitter>
//! ```
//!
//! The same types are the structured interchange form: they serialize
//! field-for-field through serde.

mod date;

pub use date::Date;

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

/// Gender of an individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unknown,
}

impl Gender {
    /// Sex letter used by the line notation, if any.
    pub fn letter(&self) -> Option<&'static str> {
        match self {
            Self::Male => Some("M"),
            Self::Female => Some("F"),
            Self::Unknown => None,
        }
    }

    /// Map a sex letter to a gender. Anything but `M`/`F` is unknown.
    pub fn from_letter(letter: &str) -> Self {
        match letter {
            "M" => Self::Male,
            "F" => Self::Female,
            _ => Self::Unknown,
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

/// A personal name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Name {
    pub given_name: String,
    pub surname: String,
    pub primary: bool,
}

impl Name {
    /// Both name parts blank. Such names are never stored.
    pub fn is_empty(&self) -> bool {
        self.given_name.trim().is_empty() && self.surname.trim().is_empty()
    }
}

/// A birth or death event.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Event {
    #[serde(skip_serializing_if = "Date::is_empty")]
    pub date: Date,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub place: String,
    pub primary: bool,
}

/// An `INDI` record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Individual {
    pub id: String,
    pub names: Vec<Name>,
    #[serde(skip_serializing_if = "Gender::is_unknown")]
    pub gender: Gender,
    pub birth_events: Vec<Event>,
    pub death_events: Vec<Event>,
}

impl Individual {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// A `FAM` record.
///
/// A cleared child slot (see the validator) is kept as an empty string so the
/// order of the remaining children is untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Family {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub father_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mother_id: Option<String>,
    pub child_ids: Vec<String>,
}

impl Family {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// The `HEAD` record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Header {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub charset: Option<String>,
    /// Back-reference to a `SUBM` record.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submitter_id: Option<String>,
}

/// A `SUBM` record.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Submitter {
    pub id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,
}

/// All records of one input.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Document {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<Header>,
    pub individuals: Vec<Individual>,
    pub families: Vec<Family>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub submitters: Vec<Submitter>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of individuals by id. Later duplicates shadow earlier ones.
    pub fn individuals_by_id(&self) -> FxHashMap<&str, &Individual> {
        self.individuals
            .iter()
            .map(|individual| (individual.id.as_str(), individual))
            .collect()
    }

    /// Set of all individual ids.
    pub fn individual_ids(&self) -> FxHashSet<&str> {
        self.individuals.iter().map(|i| i.id.as_str()).collect()
    }

    /// Visit every field that came from a line value or xref id: ids,
    /// references, names, places, date tokens and header values. `visit`
    /// gets a field name for diagnostics.
    ///
    /// Ids and the references to them are visited alike, so a transform
    /// applied here keeps them comparable.
    pub fn for_each_text_field_mut(&mut self, mut visit: impl FnMut(&'static str, &mut String)) {
        if let Some(header) = &mut self.header {
            let fields = [
                ("source", &mut header.source),
                ("charset", &mut header.charset),
                ("header_submitter", &mut header.submitter_id),
            ];
            for (field, value) in fields {
                if let Some(value) = value {
                    visit(field, value);
                }
            }
        }
        for individual in &mut self.individuals {
            visit("individual_id", &mut individual.id);
            for name in &mut individual.names {
                visit("given_name", &mut name.given_name);
                visit("surname", &mut name.surname);
            }
            for event in individual
                .birth_events
                .iter_mut()
                .chain(individual.death_events.iter_mut())
            {
                for part in event.date.text_parts_mut() {
                    visit("date", part);
                }
                visit("place", &mut event.place);
            }
        }
        for family in &mut self.families {
            visit("family_id", &mut family.id);
            for parent in [&mut family.father_id, &mut family.mother_id]
                .into_iter()
                .flatten()
            {
                visit("parent_id", parent);
            }
            for child in &mut family.child_ids {
                visit("child_id", child);
            }
        }
        for submitter in &mut self.submitters {
            visit("submitter_id", &mut submitter.id);
            visit("submitter_name", &mut submitter.name);
        }
    }

    /// Sort every collection by id (stable), giving a canonical order.
    ///
    /// Concurrent parsing appends records in completion order; compare
    /// documents only after sorting.
    pub fn sort_by_id(&mut self) {
        self.individuals.sort_by(|a, b| a.id.cmp(&b.id));
        self.families.sort_by(|a, b| a.id.cmp(&b.id));
        self.submitters.sort_by(|a, b| a.id.cmp(&b.id));
    }

    pub fn is_empty(&self) -> bool {
        self.header.is_none()
            && self.individuals.is_empty()
            && self.families.is_empty()
            && self.submitters.is_empty()
    }
}
