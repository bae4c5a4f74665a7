//! File-path convenience over [`parse_with_options`](crate::parse_with_options)
//! and [`serialize`](crate::serialize). The notation comes from the extension.

use std::fs::File;
use std::path::Path;

use crate::error::GedcomError;
use crate::model::Document;
use crate::notation::Notation;
use crate::options::ParseOptions;

/// Loads a document from a `.ged`, `.json`, `.yaml` or `.yml` file.
///
/// # Errors
///
/// Returns an error if:
/// - The extension does not name a notation
/// - The file cannot be opened or read
/// - A structured file is not well-formed
pub fn load_file(path: impl AsRef<Path>, options: &ParseOptions) -> Result<Document, GedcomError> {
    let path = path.as_ref();
    let notation = Notation::from_path(path)?;
    tracing::debug!(path = %path.display(), %notation, "loading document");
    let file = File::open(path)?;
    crate::parse_with_options(file, notation, options)
}

/// Writes a document in the notation named by the extension.
pub fn write_file(path: impl AsRef<Path>, document: &Document) -> Result<(), GedcomError> {
    let path = path.as_ref();
    let notation = Notation::from_path(path)?;
    let bytes = crate::serialize(document, notation)?;
    std::fs::write(path, bytes)?;
    tracing::debug!(path = %path.display(), %notation, "document written");
    Ok(())
}
