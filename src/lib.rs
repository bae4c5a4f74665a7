//! # gedcom-graph
//!
//! GEDCOM line notation parsing into a typed record graph, integrity repair,
//! and serialization back to line notation, JSON or YAML.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! loader     → read/write files, notation from extension
//!   ↓
//! notation   → DocumentFormat: line notation, JSON, YAML
//!   ↓
//! validate   → unique ids, header submitter, family references
//!   ↓
//! dispatch   → record splitting on the caller, interpretation on a rayon pool
//!   ↓
//! interpret  → structure interpreters (date, name, event, individual, ...)
//!   ↓
//! model      → Document and its records
//!   ↓
//! syntax     → Line tokenizer, Record grouping
//!   ↓
//! base       → tag and month tables, ASCII escaping
//! ```
//!
//! ## Usage
//!
//! ```
//! use gedcom::{Notation, parse, serialize};
//!
//! let input = "0 HEAD\n0 @I1@ INDI\n1 NAME John /Doe/\n1 SEX M\n0 TRLR\n";
//! let document = parse(input.as_bytes(), Notation::Line).unwrap();
//! assert_eq!(document.individuals[0].names[0].surname, "Doe");
//!
//! let json = serialize(&document, Notation::Json).unwrap();
//! assert!(String::from_utf8(json).unwrap().contains("\"gender\": \"MALE\""));
//! ```

use std::io::{BufReader, Read};

// ============================================================================
// MODULES (dependency order: base → syntax → model → interpret → dispatch → validate → notation)
// ============================================================================

/// Foundation: tag constants, month table, escaping
pub mod base;

/// Line tokenizer and record grouping
pub mod syntax;

/// Document, Individual, Family, Date and friends
pub mod model;

/// Structure interpreters
pub mod interpret;

/// Concurrent record dispatch into a shared document
pub mod dispatch;

/// Referential integrity repair
pub mod validate;

/// Output notations
pub mod notation;

/// File-path convenience
pub mod loader;

pub mod error;
pub mod options;

pub use dispatch::Dispatcher;
pub use error::{GedcomError, LineError, StructureError};
pub use loader::{load_file, write_file};
pub use model::{Date, Document, Event, Family, Gender, Header, Individual, Name, Submitter};
pub use notation::{DocumentFormat, Notation};
pub use options::{Concurrency, FamilyRepairPolicy, ParseOptions, ValidationOptions};
pub use validate::{ValidationReport, Validator};

// ============================================================================
// TOP-LEVEL OPERATIONS
// ============================================================================

/// Parse a document with default options.
pub fn parse<R: Read>(reader: R, notation: Notation) -> Result<Document, GedcomError> {
    parse_with_options(reader, notation, &ParseOptions::default())
}

/// Parse a document, then run the validator unless it is disabled.
///
/// Line notation is streamed: records are interpreted while the rest of the
/// input is still being read. Structured notations are read whole.
///
/// Malformed lines, structures and records are logged and skipped. The only
/// errors are read failures and structured input that is not well-formed.
pub fn parse_with_options<R: Read>(
    mut reader: R,
    notation: Notation,
    options: &ParseOptions,
) -> Result<Document, GedcomError> {
    let dispatcher = Dispatcher::from_options(options);
    let mut document = match notation {
        Notation::Line => dispatcher.dispatch(BufReader::new(reader))?,
        structured => {
            let mut input = Vec::new();
            reader.read_to_end(&mut input)?;
            structured.format(dispatcher).read(&input)?
        }
    };

    if options.validation.enabled {
        Validator::from_options(&options.validation).run(&mut document);
    }
    Ok(document)
}

/// Serialize a document.
///
/// Escaped text fields are written decoded; a field that cannot be decoded
/// is written as-is.
pub fn serialize(document: &Document, notation: Notation) -> Result<Vec<u8>, GedcomError> {
    notation.format(Dispatcher::default()).write(document)
}
