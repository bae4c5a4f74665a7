//! Line notation (`.ged`).
//!
//! Output layout, one structure per line, nesting by level only:
//!
//! ```text
//! 0 HEAD
//! 1 SUBM @U1@
//! 0 @I1@ INDI
//! 1 NAME John /Doe/
//! 2 GIVN John
//! 2 SURN Doe
//! 2 _PRIM Y
//! 1 BIRT
//! 2 DATE 02 OCT 1822
//! 2 PLAC Weston
//! 2 _PRIM N
//! 1 SEX M
//! 0 @F1@ FAM
//! 1 HUSB @I1@
//! 1 CHIL @I3@
//! 0 @U1@ SUBM
//! 1 NAME Archivist
//! 0 TRLR
//! ```
//!
//! A line whose value would be empty is left out, except for lines that
//! introduce a structure (`NAME`, `BIRT`, `DEAT`).

use crate::base::constants::{primary_value, tags};
use crate::dispatch::Dispatcher;
use crate::error::GedcomError;
use crate::model::{Document, Event, Family, Header, Individual, Name, Submitter};
use crate::syntax::write_line;

use super::decode::decode_text_fields;
use super::{DocumentFormat, Notation};

/// Line notation handler.
#[derive(Debug, Clone, Default)]
pub struct LineNotation {
    dispatcher: Dispatcher,
}

impl LineNotation {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self { dispatcher }
    }
}

impl DocumentFormat for LineNotation {
    fn notation(&self) -> Notation {
        Notation::Line
    }

    fn read(&self, input: &[u8]) -> Result<Document, GedcomError> {
        self.dispatcher.dispatch(input)
    }

    fn write(&self, document: &Document) -> Result<Vec<u8>, GedcomError> {
        Ok(write_document(document).into_bytes())
    }
}

/// Render a document as line notation.
pub fn write_document(document: &Document) -> String {
    let document = decode_text_fields(document);
    let mut out = String::new();

    write_header(&mut out, document.header.as_ref());
    for individual in &document.individuals {
        write_individual(&mut out, individual);
    }
    for family in &document.families {
        write_family(&mut out, family);
    }
    for submitter in &document.submitters {
        write_submitter(&mut out, submitter);
    }
    write_line(&mut out, 0, None, tags::TRLR, "");

    out
}

fn write_header(out: &mut String, header: Option<&Header>) {
    write_line(out, 0, None, tags::HEAD, "");
    let Some(header) = header else {
        return;
    };
    let fields = [
        (tags::SOUR, &header.source),
        (tags::CHAR, &header.charset),
        (tags::SUBM, &header.submitter_id),
    ];
    for (tag, value) in fields {
        if let Some(value) = value.as_deref().filter(|v| !v.is_empty()) {
            write_line(out, 1, None, tag, value);
        }
    }
}

fn write_individual(out: &mut String, individual: &Individual) {
    write_line(out, 0, Some(&individual.id), tags::INDI, "");
    for name in &individual.names {
        write_name(out, 1, name);
    }
    for event in &individual.birth_events {
        write_event(out, 1, tags::BIRT, event);
    }
    for event in &individual.death_events {
        write_event(out, 1, tags::DEAT, event);
    }
    if let Some(letter) = individual.gender.letter() {
        write_line(out, 1, None, tags::SEX, letter);
    }
}

fn write_name(out: &mut String, level: u8, name: &Name) {
    let inline = match (name.given_name.as_str(), name.surname.as_str()) {
        (given, "") => given.to_string(),
        ("", surname) => format!("/{surname}/"),
        (given, surname) => format!("{given} /{surname}/"),
    };
    write_line(out, level, None, tags::NAME, &inline);
    write_line_if_present(out, level + 1, tags::GIVN, &name.given_name);
    write_line_if_present(out, level + 1, tags::SURN, &name.surname);
    write_line(out, level + 1, None, tags::PRIM, primary_value(name.primary));
}

fn write_event(out: &mut String, level: u8, tag: &str, event: &Event) {
    write_line(out, level, None, tag, "");
    write_line_if_present(out, level + 1, tags::DATE, &event.date.to_string());
    write_line_if_present(out, level + 1, tags::PLAC, &event.place);
    write_line(out, level + 1, None, tags::PRIM, primary_value(event.primary));
}

fn write_family(out: &mut String, family: &Family) {
    write_line(out, 0, Some(&family.id), tags::FAM, "");
    if let Some(father) = &family.father_id {
        write_line_if_present(out, 1, tags::HUSB, father);
    }
    if let Some(mother) = &family.mother_id {
        write_line_if_present(out, 1, tags::WIFE, mother);
    }
    for child in &family.child_ids {
        write_line_if_present(out, 1, tags::CHIL, child);
    }
}

fn write_submitter(out: &mut String, submitter: &Submitter) {
    write_line(out, 0, Some(&submitter.id), tags::SUBM, "");
    write_line_if_present(out, 1, tags::NAME, &submitter.name);
}

fn write_line_if_present(out: &mut String, level: u8, tag: &str, value: &str) {
    if !value.is_empty() {
        write_line(out, level, None, tag, value);
    }
}
