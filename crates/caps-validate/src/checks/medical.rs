//! Section 3 checks: cardiac arrest history.
//!
//! The flag-from-date direction is an auto-correction applied before this
//! check runs, so only the date-missing direction can fail here.

use caps_model::{CaseRecord, Section, ValidationIssue};

use crate::options::ValidationOptions;

pub fn check(case: &CaseRecord, options: &ValidationOptions, issues: &mut Vec<ValidationIssue>) {
    if case.cardiac_arrest && case.cardiac_arrest_date.is_none() {
        issues.push(ValidationIssue::new(
            Section::Three,
            "Please enter the date of the most recent cardiac arrest",
        ));
    }
    if let Some(date) = case.cardiac_arrest_date
        && date > options.today
    {
        issues.push(ValidationIssue::new(
            Section::Three,
            "Date of last cardiac arrest cannot be in the future",
        ));
    }
}
