//! In-memory case repository.
//!
//! The engine itself has no persistence opinion; this store is the reference
//! collaborator used by the CLI and the tests. Each save attempt goes
//! through the full validation pass inside one logical transaction: a case
//! that fails any check is never stored. Children live inside the stored
//! bundle, so deleting a case drops them with it.

mod error;

pub use error::StoreError;

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::info;

use caps_model::{CaseBundle, ChildRecord};
use caps_validate::{ValidationOptions, validate_bundle, validate_child};

/// Repository-assigned identifier, sequential per store.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct CaseId(u64);

impl CaseId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A persisted case with its repository id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredCase {
    pub id: CaseId,
    pub bundle: CaseBundle,
}

#[derive(Debug, Default)]
pub struct CaseStore {
    cases: Vec<StoredCase>,
    next_id: u64,
    options: ValidationOptions,
}

impl CaseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ValidationOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Validate and persist a newly entered case with its children.
    ///
    /// The stored case carries any auto-corrections the pass applied.
    pub fn create(&mut self, mut bundle: CaseBundle) -> Result<CaseId, StoreError> {
        let report = validate_bundle(&mut bundle, &self.options);
        if !report.is_clean() {
            return Err(StoreError::Rejected(report.issues));
        }
        self.next_id += 1;
        let id = CaseId(self.next_id);
        info!(%id, case_id = %bundle.case.case_id, "case stored");
        self.cases.push(StoredCase { id, bundle });
        Ok(id)
    }

    /// Attach another child record to an existing case.
    ///
    /// The record is validated on its own and the case is re-validated
    /// against the grown snapshot before anything is kept.
    pub fn add_child(&mut self, id: CaseId, child: ChildRecord) -> Result<(), StoreError> {
        let position = self
            .cases
            .iter()
            .position(|stored| stored.id == id)
            .ok_or(StoreError::UnknownCase(id))?;

        if let Err(issue) = validate_child(&child) {
            return Err(StoreError::Rejected(vec![issue]));
        }

        let mut candidate = self.cases[position].bundle.clone();
        candidate.children.push(child);
        let report = validate_bundle(&mut candidate, &self.options);
        if !report.is_clean() {
            return Err(StoreError::Rejected(report.issues));
        }
        self.cases[position].bundle = candidate;
        Ok(())
    }

    pub fn get(&self, id: CaseId) -> Option<&StoredCase> {
        self.cases.iter().find(|stored| stored.id == id)
    }

    /// All cases with children preloaded, ordered by creation time
    /// (most recently created last).
    pub fn list_all(&self) -> Vec<&StoredCase> {
        let mut listing: Vec<&StoredCase> = self.cases.iter().collect();
        listing.sort_by_key(|stored| (stored.bundle.case.created_on, stored.id));
        listing
    }

    /// Remove a case; its children go with it.
    pub fn delete(&mut self, id: CaseId) -> Result<(), StoreError> {
        let position = self
            .cases
            .iter()
            .position(|stored| stored.id == id)
            .ok_or(StoreError::UnknownCase(id))?;
        self.cases.remove(position);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }
}
