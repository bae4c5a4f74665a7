//! Parse and validation options.
//!
//! Options derive serde so an embedding application can keep them in its own
//! JSON or YAML configuration. Every field has a default.

use serde::{Deserialize, Serialize};

/// How records are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Concurrency {
    /// One task per record on a rayon pool.
    #[default]
    Parallel,
    /// One record after another on the calling thread.
    Sequential,
}

/// What the validator does with a family that references a missing
/// individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FamilyRepairPolicy {
    /// Clear the dangling father/mother reference; blank out a dangling
    /// child slot in place, keeping the order of the others.
    #[default]
    ClearDangling,
    /// Drop the whole family when any of its references dangles.
    RemoveFamily,
}

/// Options for the integrity validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Run the validator as the last step of `parse`.
    pub enabled: bool,
    pub family_policy: FamilyRepairPolicy,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            family_policy: FamilyRepairPolicy::default(),
        }
    }
}

/// Options for `parse`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub concurrency: Concurrency,
    /// Worker count for a dedicated pool. `None` uses rayon's global pool.
    pub threads: Option<usize>,
    pub validation: ValidationOptions,
}

impl ParseOptions {
    /// Options for interpreting on the calling thread only.
    pub fn sequential() -> Self {
        Self {
            concurrency: Concurrency::Sequential,
            ..Self::default()
        }
    }

    pub fn with_family_policy(mut self, policy: FamilyRepairPolicy) -> Self {
        self.validation.family_policy = policy;
        self
    }

    pub fn without_validation(mut self) -> Self {
        self.validation.enabled = false;
        self
    }
}
