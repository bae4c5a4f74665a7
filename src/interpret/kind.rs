//! Closed tag → kind mappings.
//!
//! Each structure has its own small enum of the tags it understands, with an
//! `Other` arm for everything else. `Other` is always a no-op for the
//! interpreters, which is what keeps unknown tags from ever failing a parse.

use crate::base::constants::tags;

/// Kind of a top-level record, keyed by its leading tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Header,
    Individual,
    Family,
    Submitter,
    Trailer,
    Other,
}

impl RecordKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            tags::HEAD => Self::Header,
            tags::INDI => Self::Individual,
            tags::FAM => Self::Family,
            tags::SUBM => Self::Submitter,
            tags::TRLR => Self::Trailer,
            _ => Self::Other,
        }
    }
}

/// Substructures of an individual record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IndividualTag {
    Name,
    Sex,
    Birth,
    Death,
    Other,
}

impl IndividualTag {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            tags::NAME => Self::Name,
            tags::SEX => Self::Sex,
            tags::BIRT => Self::Birth,
            tags::DEAT => Self::Death,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NameTag {
    Given,
    Surname,
    Primary,
    Other,
}

impl NameTag {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            tags::GIVN => Self::Given,
            tags::SURN => Self::Surname,
            tags::PRIM => Self::Primary,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTag {
    Date,
    Place,
    Primary,
    Other,
}

impl EventTag {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            tags::DATE => Self::Date,
            tags::PLAC => Self::Place,
            tags::PRIM => Self::Primary,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FamilyTag {
    Husband,
    Wife,
    Child,
    Other,
}

impl FamilyTag {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            tags::HUSB => Self::Husband,
            tags::WIFE => Self::Wife,
            tags::CHIL => Self::Child,
            _ => Self::Other,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderTag {
    Source,
    Charset,
    Submitter,
    Other,
}

impl HeaderTag {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            tags::SOUR => Self::Source,
            tags::CHAR => Self::Charset,
            tags::SUBM => Self::Submitter,
            _ => Self::Other,
        }
    }
}
