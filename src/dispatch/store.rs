//! Lock-guarded document under construction.

use parking_lot::RwLock;

use crate::interpret::Interpreted;
use crate::model::Document;

/// Append-only collections shared by the record workers.
///
/// Workers only ever append one finished value at a time. Reading the
/// contents requires giving up the store with [`DocumentStore::into_document`],
/// which can only happen once every worker holding a reference is done.
#[derive(Debug, Default)]
pub struct DocumentStore {
    merged: RwLock<Merged>,
}

#[derive(Debug, Default)]
struct Merged {
    document: Document,
    /// Input position of the record the kept header came from.
    header_position: Option<usize>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one interpreted record. `position` is the record's index in the
    /// input; of several `HEAD` records the earliest one is kept, whatever
    /// order they arrive in.
    pub fn append(&self, position: usize, interpreted: Interpreted) {
        match interpreted {
            Interpreted::Individual(individual) => {
                self.merged.write().document.individuals.push(individual)
            }
            Interpreted::Family(family) => self.merged.write().document.families.push(family),
            Interpreted::Submitter(submitter) => {
                self.merged.write().document.submitters.push(submitter)
            }
            Interpreted::Header(header) => {
                let mut merged = self.merged.write();
                if let Some(kept) = merged.header_position {
                    tracing::warn!(
                        first = kept.min(position),
                        duplicate = kept.max(position),
                        "duplicate HEAD record, keeping the first"
                    );
                }
                if merged.header_position.is_none_or(|kept| position < kept) {
                    merged.document.header = Some(header);
                    merged.header_position = Some(position);
                }
            }
            Interpreted::Ignored => {}
        }
    }

    /// Number of individuals and families merged so far.
    pub fn counts(&self) -> (usize, usize) {
        let merged = self.merged.read();
        (merged.document.individuals.len(), merged.document.families.len())
    }

    pub fn into_document(self) -> Document {
        self.merged.into_inner().document
    }
}
