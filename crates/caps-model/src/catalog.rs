//! Reference catalogs: immutable code-to-label lookup tables.
//!
//! Built once into the binary and read-only thereafter. Lookup never fails
//! hard: an unrecognized code resolves to the empty string, since codes are
//! expected to originate from the closed choice lists in the first place.

use std::fmt;
use std::str::FromStr;

use crate::enums::{MaritalStatus, SmokingStatus};
use crate::error::ModelError;
use crate::kinds::{HeartDiseaseFactorKind, MedicalProblemKind, PregnancyProblemKind};

/// Census-based ethnic origin table: (code, group heading, label).
/// Code 0 is the ungrouped Unknown entry.
pub const ETHNIC_GROUPS: &[(u8, &str, &str)] = &[
    (0, "", "Unknown"),
    (1, "White", "British"),
    (2, "White", "Irish"),
    (3, "White", "Any Other White Background"),
    (4, "Mixed", "White & Black Caribbean"),
    (5, "Mixed", "White & Black African"),
    (6, "Mixed", "White & Asian"),
    (7, "Mixed", "Any Other Mixed Background"),
    (8, "Asian or Asian British", "Indian"),
    (9, "Asian or Asian British", "Pakistani"),
    (10, "Asian or Asian British", "Bangladeshi"),
    (11, "Asian or Asian British", "Any Other Asian Background"),
    (12, "Black or Black British", "Caribbean"),
    (13, "Black or Black British", "African"),
    (14, "Black or Black British", "Any Other Black Background"),
    (15, "Chinese or Other Ethnic Group", "Chinese"),
    (16, "Chinese or Other Ethnic Group", "Any Other Ethnic Group"),
];

/// The independently coded enumerations a stored value can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Catalog {
    EthnicGroup,
    MaritalStatus,
    Smoking,
    PregnancyProblem,
    HeartDiseaseFactor,
    MedicalProblem,
}

impl Catalog {
    pub fn name(&self) -> &'static str {
        match self {
            Catalog::EthnicGroup => "ethnic_group",
            Catalog::MaritalStatus => "marital_status",
            Catalog::Smoking => "smoking",
            Catalog::PregnancyProblem => "pregnancy_problem",
            Catalog::HeartDiseaseFactor => "heart_disease_factor",
            Catalog::MedicalProblem => "medical_problem",
        }
    }
}

impl fmt::Display for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Catalog {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ethnic_group" => Ok(Catalog::EthnicGroup),
            "marital_status" => Ok(Catalog::MaritalStatus),
            "smoking" => Ok(Catalog::Smoking),
            "pregnancy_problem" => Ok(Catalog::PregnancyProblem),
            "heart_disease_factor" => Ok(Catalog::HeartDiseaseFactor),
            "medical_problem" => Ok(Catalog::MedicalProblem),
            _ => Err(ModelError::UnknownCatalog(s.to_string())),
        }
    }
}

/// Resolve a stored code to its display label.
///
/// Returns the empty string when the code is not in the table. This is the
/// defined behavior, not an error.
pub fn label_for(catalog: Catalog, code: &str) -> &'static str {
    let code = code.trim();
    match catalog {
        Catalog::EthnicGroup => code
            .parse::<u8>()
            .ok()
            .and_then(|wanted| {
                ETHNIC_GROUPS
                    .iter()
                    .find(|(entry, _, _)| *entry == wanted)
                    .map(|(_, _, label)| *label)
            })
            .unwrap_or(""),
        Catalog::MaritalStatus => code
            .parse::<MaritalStatus>()
            .map(|status| status.label())
            .unwrap_or(""),
        Catalog::Smoking => code
            .parse::<SmokingStatus>()
            .map(|status| status.label())
            .unwrap_or(""),
        Catalog::PregnancyProblem => code
            .parse::<PregnancyProblemKind>()
            .map(|kind| kind.label())
            .unwrap_or(""),
        Catalog::HeartDiseaseFactor => code
            .parse::<HeartDiseaseFactorKind>()
            .map(|kind| kind.label())
            .unwrap_or(""),
        Catalog::MedicalProblem => code
            .parse::<MedicalProblemKind>()
            .map(|kind| kind.label())
            .unwrap_or(""),
    }
}

/// Census group heading for an ethnic origin code ("" when unknown or
/// ungrouped).
pub fn ethnic_group_heading(code: u8) -> &'static str {
    ETHNIC_GROUPS
        .iter()
        .find(|(entry, _, _)| *entry == code)
        .map(|(_, group, _)| *group)
        .unwrap_or("")
}

/// Display label for an ethnic origin code held as a number on the case.
pub fn ethnic_group_label(code: u8) -> &'static str {
    ETHNIC_GROUPS
        .iter()
        .find(|(entry, _, _)| *entry == code)
        .map(|(_, _, label)| *label)
        .unwrap_or("")
}
