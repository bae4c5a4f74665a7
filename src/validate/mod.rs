//! Referential integrity.
//!
//! Three passes, always in this order:
//!
//! 1. **Unique individual ids** - a repeated id is replaced with a fresh one
//!    from [`IdAllocator`]; the record itself is kept. References elsewhere
//!    that meant the duplicate still point at the first holder of the id.
//! 2. **Header submitter** - a dangling `SUBM` reference falls back to the
//!    first submitter, or is dropped when there is none.
//! 3. **Family references** - handled per [`FamilyRepairPolicy`].
//!
//! Nothing here fails; every repair is logged and recorded in the returned
//! [`ValidationReport`]. Running the validator again on its own output
//! changes nothing.

mod ids;

pub use ids::IdAllocator;

use rustc_hash::FxHashSet;

use crate::model::Document;
use crate::options::{FamilyRepairPolicy, ValidationOptions};

/// What happened to the header's submitter reference.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum HeaderRepair {
    /// No header, no reference, or the reference resolved.
    #[default]
    Unchanged,
    /// Pointed at a missing submitter; replaced by the first known one.
    Replaced { from: String, to: String },
    /// Pointed at a missing submitter and none exist.
    Removed { from: String },
}

/// Everything the validator changed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    /// `(old id, new id)` for each renamed duplicate individual.
    pub renamed_ids: Vec<(String, String)>,
    pub header: HeaderRepair,
    /// `(family id, dangling id)` for each cleared reference.
    pub cleared_references: Vec<(String, String)>,
    /// Ids of families dropped under [`FamilyRepairPolicy::RemoveFamily`].
    pub removed_families: Vec<String>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.renamed_ids.is_empty()
            && self.header == HeaderRepair::Unchanged
            && self.cleared_references.is_empty()
            && self.removed_families.is_empty()
    }
}

/// Runs the integrity passes over a document.
#[derive(Debug, Clone, Default)]
pub struct Validator {
    family_policy: FamilyRepairPolicy,
}

impl Validator {
    pub fn new(family_policy: FamilyRepairPolicy) -> Self {
        Self { family_policy }
    }

    pub fn from_options(options: &ValidationOptions) -> Self {
        Self::new(options.family_policy)
    }

    /// Run all three passes.
    pub fn run(&self, document: &mut Document) -> ValidationReport {
        let mut report = ValidationReport {
            renamed_ids: deduplicate_individual_ids(document),
            header: repair_header_submitter(document),
            ..ValidationReport::default()
        };
        match self.family_policy {
            FamilyRepairPolicy::ClearDangling => {
                report.cleared_references = clear_dangling_family_references(document);
            }
            FamilyRepairPolicy::RemoveFamily => {
                report.removed_families = remove_dangling_families(document);
            }
        }

        if report.is_clean() {
            tracing::debug!("document passed validation unchanged");
        } else {
            tracing::info!(
                renamed = report.renamed_ids.len(),
                cleared = report.cleared_references.len(),
                removed = report.removed_families.len(),
                "document repaired"
            );
        }
        report
    }
}

/// Pass 1: give every repeated individual id a fresh one.
pub fn deduplicate_individual_ids(document: &mut Document) -> Vec<(String, String)> {
    let mut allocator = IdAllocator::new(document.individuals.iter().map(|i| i.id.clone()));
    let mut seen = FxHashSet::default();
    let mut renamed = Vec::new();

    for individual in &mut document.individuals {
        if seen.insert(individual.id.clone()) {
            continue;
        }
        let fresh = allocator.allocate();
        tracing::warn!(id = %individual.id, replacement = %fresh, "duplicate individual id");
        seen.insert(fresh.clone());
        renamed.push((std::mem::replace(&mut individual.id, fresh.clone()), fresh));
    }
    renamed
}

/// Pass 2: make the header's submitter reference resolve or remove it.
pub fn repair_header_submitter(document: &mut Document) -> HeaderRepair {
    let Some(header) = document.header.as_mut() else {
        return HeaderRepair::Unchanged;
    };
    let Some(reference) = header.submitter_id.as_deref() else {
        return HeaderRepair::Unchanged;
    };
    if document.submitters.iter().any(|s| s.id == reference) {
        tracing::debug!(submitter = reference, "header submitter resolved");
        return HeaderRepair::Unchanged;
    }

    match document.submitters.first() {
        Some(first) => {
            tracing::warn!(
                submitter = reference,
                replacement = %first.id,
                "invalid header submitter, defaulting to first submitter"
            );
            let from = header.submitter_id.replace(first.id.clone()).unwrap_or_default();
            HeaderRepair::Replaced {
                from,
                to: first.id.clone(),
            }
        }
        None => {
            tracing::warn!(
                submitter = reference,
                "invalid header submitter, no alternative found, removing reference"
            );
            HeaderRepair::Removed {
                from: header.submitter_id.take().unwrap_or_default(),
            }
        }
    }
}

/// Pass 3, default policy: clear each reference that does not resolve.
///
/// A dangling child slot becomes an empty string rather than being removed,
/// so the remaining children keep their positions.
pub fn clear_dangling_family_references(document: &mut Document) -> Vec<(String, String)> {
    let known: FxHashSet<&str> = document.individuals.iter().map(|i| i.id.as_str()).collect();
    let mut cleared = Vec::new();

    for family in &mut document.families {
        for parent in [&mut family.father_id, &mut family.mother_id] {
            if let Some(id) = parent.take_if(|id| !known.contains(id.as_str())) {
                tracing::warn!(family = %family.id, reference = %id, "clearing dangling parent");
                cleared.push((family.id.clone(), id));
            }
        }
        for child in &mut family.child_ids {
            if child.is_empty() || known.contains(child.as_str()) {
                continue;
            }
            tracing::warn!(family = %family.id, reference = %child, "clearing dangling child");
            cleared.push((family.id.clone(), std::mem::take(child)));
        }
    }
    cleared
}

/// Pass 3, strict policy: drop every family with any dangling reference.
///
/// Absent parents and empty child slots are not references and never cause
/// removal.
pub fn remove_dangling_families(document: &mut Document) -> Vec<String> {
    let known: FxHashSet<&str> = document.individuals.iter().map(|i| i.id.as_str()).collect();
    let resolves = |id: &str| id.is_empty() || known.contains(id);
    let mut removed = Vec::new();

    document.families.retain(|family| {
        let intact = [&family.father_id, &family.mother_id]
            .into_iter()
            .flatten()
            .chain(&family.child_ids)
            .all(|id| resolves(id));
        if !intact {
            tracing::warn!(family = %family.id, "removing family with dangling reference");
            removed.push(family.id.clone());
        }
        intact
    });
    removed
}
