//! The central case record: one survey instance per woman.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{Answer, MaritalStatus, SmokingStatus};

/// Lower bound on year of birth. The upper bound is the current year.
pub const MIN_YEAR_OF_BIRTH: i32 = 1900;

/// Height at booking, in whole centimetres.
pub const HEIGHT_RANGE_CM: std::ops::RangeInclusive<u32> = 90..=300;

/// Weight at booking, in kilograms with one decimal place of accuracy.
pub const WEIGHT_RANGE_KG: std::ops::RangeInclusive<f64> = 30.0..=300.0;

/// Upper bound on either gravidity count.
pub const MAX_GRAVIDITY: u8 = 20;

/// The person who completed the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reporter {
    pub username: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl Reporter {
    /// Display name used in listings ("First Last", falling back to the
    /// username when no name parts were recorded).
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name, self.last_name);
        let full = full.trim();
        if full.is_empty() {
            self.username.clone()
        } else {
            full.to_string()
        }
    }
}

/// One completed survey form, broken into the three sections of the paper
/// original plus background record keeping.
///
/// No distinction is drawn between "Unknown" and "Unanswered" for the plain
/// boolean questions; only `previous_pregnancy_problem` carries an explicit
/// tri-state because its question may legitimately be skipped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseRecord {
    // Background record keeping
    pub case_id: String,
    #[serde(default)]
    pub case_reported: Option<String>,
    pub created_by: Reporter,
    pub created_on: DateTime<Utc>,

    // Section 1: Woman's details
    pub year_of_birth: i32,
    /// Census ethnic origin code, resolved through the reference catalog.
    /// 0 means Unknown.
    pub ethnic_group: u8,
    pub marital_status: MaritalStatus,
    /// Was the woman in paid employment at booking?
    pub employed: bool,
    /// Required when `employed`; otherwise the partner's occupation if known.
    #[serde(default)]
    pub occupation: Option<String>,
    pub height_cm: u32,
    pub weight_kg: f64,
    pub smoking: SmokingStatus,

    // Section 2: Previous Obstetric History
    /// Completed pregnancies beyond 24 weeks.
    #[serde(default)]
    pub gravidity_24plus: u8,
    /// Pregnancies of less than 24 weeks.
    #[serde(default)]
    pub gravidity_24minus: u8,
    #[serde(default)]
    pub previous_pregnancy_problem: Answer,

    // Section 3: Previous Medical History
    pub heart_disease: bool,
    pub cardiac_arrest: bool,
    #[serde(default)]
    pub cardiac_arrest_date: Option<chrono::NaiveDate>,
    #[serde(default)]
    pub cardiac_arrest_cause: Option<String>,
    pub drug_use: bool,
    pub previous_medical_problem: bool,
}

impl CaseRecord {
    /// True when an occupation was recorded and is not just whitespace.
    pub fn has_occupation(&self) -> bool {
        self.occupation
            .as_deref()
            .is_some_and(|text| !text.trim().is_empty())
    }

    /// True when either gravidity count records a previous pregnancy.
    pub fn has_previous_pregnancies(&self) -> bool {
        self.gravidity_24plus > 0 || self.gravidity_24minus > 0
    }
}

impl fmt::Display for CaseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Case ID {} created on {} by {}",
            self.case_id,
            self.created_on.format("%Y-%m-%d %H:%M:%S"),
            self.created_by.display_name()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reporter_display_name_falls_back_to_username() {
        let reporter = Reporter {
            username: "jsmith".to_string(),
            first_name: String::new(),
            last_name: String::new(),
        };
        assert_eq!(reporter.display_name(), "jsmith");

        let named = Reporter {
            username: "jsmith".to_string(),
            first_name: "Jo".to_string(),
            last_name: "Smith".to_string(),
        };
        assert_eq!(named.display_name(), "Jo Smith");
    }

    #[test]
    fn blank_occupation_counts_as_missing() {
        let mut case = crate::test_support::minimal_case();
        case.occupation = Some("   ".to_string());
        assert!(!case.has_occupation());
        case.occupation = Some("Midwife".to_string());
        assert!(case.has_occupation());
    }
}
