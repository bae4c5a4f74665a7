//! Error types.
//!
//! Three layers, matching how far a failure is allowed to travel:
//!
//! - [`LineError`] - one unreadable line; the owning interpreter skips it
//! - [`StructureError`] - one unreadable structure or record; skipped and logged
//! - [`GedcomError`] - fatal for a whole `parse` / `serialize` call

use thiserror::Error;

/// A single line could not be tokenized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    /// The leading token is missing or not a non-negative integer.
    #[error("malformed level in line '{line}'")]
    MalformedLevel { line: String },

    /// No tag follows the level (and optional xref id).
    #[error("missing tag in line '{line}'")]
    MissingTag { line: String },
}

/// A structure or record could not be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StructureError {
    /// The introducing line itself is unreadable.
    #[error("unreadable root of {kind} structure: {source}")]
    UnreadableRoot {
        kind: &'static str,
        #[source]
        source: LineError,
    },

    /// A record that must carry an xref id has none.
    #[error("{tag} record without xref id: '{line}'")]
    MissingId { tag: &'static str, line: String },

    /// An interpreter was handed a structure it does not handle.
    #[error("expected {expected} structure, found {found}")]
    UnexpectedTag { expected: &'static str, found: String },

    /// The structure has no lines at all.
    #[error("empty {0} structure")]
    Empty(&'static str),
}

/// Errors that abort a whole parse or serialize call.
#[derive(Debug, Error)]
pub enum GedcomError {
    /// IO error while reading or writing.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// YAML parsing or serialization error.
    #[error("YAML error: {0}")]
    Yaml(String),

    /// Notation could not be identified.
    #[error("Unknown notation: {0}")]
    UnknownNotation(String),

    /// Unsupported operation for a notation.
    #[error("Unsupported: {0}")]
    Unsupported(String),
}

impl GedcomError {
    /// Create a JSON error.
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }

    /// Create a YAML error.
    pub fn yaml(message: impl Into<String>) -> Self {
        Self::Yaml(message.into())
    }

    /// Create an unknown notation error.
    pub fn unknown_notation(name: impl Into<String>) -> Self {
        Self::UnknownNotation(name.into())
    }
}

impl From<serde_json::Error> for GedcomError {
    fn from(e: serde_json::Error) -> Self {
        Self::json(e.to_string())
    }
}

impl From<serde_yaml::Error> for GedcomError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::yaml(e.to_string())
    }
}
