//! Auxiliary records attached to a case.
//!
//! Each child record belongs to exactly one case and is entered inline on
//! the same form. Their lifetime is bound to the case: deleting the case
//! deletes them.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::case::CaseRecord;
use crate::drug::Drug;
use crate::kinds::{HeartDiseaseFactorKind, MedicalProblemKind, PregnancyProblemKind};

/// A coded previous pregnancy problem (Section 2).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PregnancyProblem {
    pub kind: PregnancyProblemKind,
    #[serde(default)]
    pub details: Option<String>,
}

/// A coded predisposing factor for heart disease (Section 3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeartDiseaseFactor {
    pub kind: HeartDiseaseFactorKind,
    #[serde(default)]
    pub details: Option<String>,
}

/// A coded pre-existing or previous medical problem (Section 3).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedicalProblem {
    pub kind: MedicalProblemKind,
    #[serde(default)]
    pub details: Option<String>,
}

/// One recorded use of a drug (Section 3).
///
/// Last use may be unknown, in which case `last_use` is empty and
/// `last_use_unknown` is true. When a date and time is supplied,
/// `last_use_unknown` should be false (and is the default). If both end up
/// set, the date takes precedence for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugUseEvent {
    pub drug: Drug,
    #[serde(default)]
    pub last_use: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_use_unknown: bool,
}

impl fmt::Display for DrugUseEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.last_use {
            Some(when) => write!(
                f,
                "{} used at {}",
                self.drug.name,
                when.format("%Y-%m-%d %H:%M")
            ),
            None => write!(f, "{} used at an unknown time and date", self.drug.name),
        }
    }
}

/// Snapshot of every child record currently attached to a case.
///
/// The validation engine takes this explicitly rather than relying on
/// save-order side effects between related records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChildRecords {
    #[serde(default)]
    pub pregnancy_problems: Vec<PregnancyProblem>,
    #[serde(default)]
    pub heart_disease_factors: Vec<HeartDiseaseFactor>,
    #[serde(default)]
    pub drug_use_events: Vec<DrugUseEvent>,
    #[serde(default)]
    pub medical_problems: Vec<MedicalProblem>,
}

impl ChildRecords {
    pub fn is_empty(&self) -> bool {
        self.pregnancy_problems.is_empty()
            && self.heart_disease_factors.is_empty()
            && self.drug_use_events.is_empty()
            && self.medical_problems.is_empty()
    }

    /// Attach one more record to the matching collection.
    pub fn push(&mut self, child: ChildRecord) {
        match child {
            ChildRecord::Pregnancy(problem) => self.pregnancy_problems.push(problem),
            ChildRecord::HeartDisease(factor) => self.heart_disease_factors.push(factor),
            ChildRecord::DrugUse(event) => self.drug_use_events.push(event),
            ChildRecord::Medical(problem) => self.medical_problems.push(problem),
        }
    }
}

/// A child record of any of the four kinds, for code paths that handle one
/// record at a time (inline add, per-record validation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "record", rename_all = "snake_case")]
pub enum ChildRecord {
    Pregnancy(PregnancyProblem),
    HeartDisease(HeartDiseaseFactor),
    DrugUse(DrugUseEvent),
    Medical(MedicalProblem),
}

/// The unit of data entry: a case together with its child records, as
/// assembled by one submission of the form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseBundle {
    pub case: CaseRecord,
    #[serde(default)]
    pub children: ChildRecords,
}
