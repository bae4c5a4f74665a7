//! Output notations.
//!
//! Every notation implements [`DocumentFormat`]; [`Notation`] names them and
//! picks one from a file extension.
//!
//! | Notation | Extensions    | Read | Write |
//! |----------|---------------|------|-------|
//! | Line     | `ged`         | yes  | yes   |
//! | JSON     | `json`        | yes  | yes   |
//! | YAML     | `yaml`, `yml` | yes  | yes   |
//!
//! A [`Document`] always holds text in the tokenizer's escaped form. Writers
//! reverse the escaping first, so text comes out as real Unicode in every
//! notation, and the structured readers escape what they read.

mod decode;
mod line;
mod structured;

pub use decode::{decode_text_fields, escape_text_fields};
pub use line::{LineNotation, write_document};
pub use structured::{Json, Yaml};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::dispatch::Dispatcher;
use crate::error::GedcomError;
use crate::model::Document;

/// Reading and writing a [`Document`] in one notation.
pub trait DocumentFormat: Send + Sync {
    fn notation(&self) -> Notation;

    /// Read a document from bytes.
    fn read(&self, input: &[u8]) -> Result<Document, GedcomError>;

    /// Write a document to bytes.
    fn write(&self, document: &Document) -> Result<Vec<u8>, GedcomError>;
}

/// The notations a document can be read from or written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notation {
    #[default]
    Line,
    Json,
    Yaml,
}

impl Notation {
    pub const ALL: [Notation; 3] = [Notation::Line, Notation::Json, Notation::Yaml];

    pub fn name(self) -> &'static str {
        match self {
            Notation::Line => "GEDCOM",
            Notation::Json => "JSON",
            Notation::Yaml => "YAML",
        }
    }

    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Notation::Line => &["ged"],
            Notation::Json => &["json"],
            Notation::Yaml => &["yaml", "yml"],
        }
    }

    /// Case-insensitive lookup by extension, without the leading dot.
    pub fn from_extension(extension: &str) -> Option<Self> {
        let extension = extension.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|notation| notation.extensions().contains(&extension.as_str()))
    }

    pub fn from_path(path: &Path) -> Result<Self, GedcomError> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .ok_or_else(|| GedcomError::unknown_notation(path.display().to_string()))
    }

    /// Handler for this notation. Line notation reads with `dispatcher`.
    pub fn format(self, dispatcher: Dispatcher) -> Box<dyn DocumentFormat> {
        match self {
            Notation::Line => Box::new(LineNotation::new(dispatcher)),
            Notation::Json => Box::new(Json),
            Notation::Yaml => Box::new(Yaml),
        }
    }
}

impl std::fmt::Display for Notation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
