//! Validation engine for CAPS survey records.
//!
//! One centrally invoked pass per save attempt: a case and an explicit
//! snapshot of its child records go in; auto-corrections are applied to the
//! case, and every violated constraint comes back as a structured issue
//! (all of them, not just the first). Nothing here is fatal - a failed pass
//! means the submitter corrects and resubmits.

pub mod checks;
mod corrections;
mod options;

pub use options::{DrugUsePolicy, ValidationOptions};

use caps_model::{
    CaseBundle, CaseRecord, ChildRecord, ChildRecords, DrugUseEvent, Section, ValidationIssue,
    ValidationReport,
};
use tracing::debug;

/// Validate a case against its current child-record snapshot.
///
/// Applies the flag auto-corrections first, then runs the section checks in
/// form order. Returns all collected issues on failure.
pub fn validate_case(
    case: &mut CaseRecord,
    children: &ChildRecords,
    options: &ValidationOptions,
) -> Result<(), Vec<ValidationIssue>> {
    corrections::apply(case, children, options);

    let mut issues = Vec::new();
    checks::demographics::check(case, options, &mut issues);
    checks::obstetric::check(case, children, &mut issues);
    checks::medical::check(case, options, &mut issues);

    if issues.is_empty() {
        Ok(())
    } else {
        debug!(case_id = %case.case_id, count = issues.len(), "case rejected");
        Err(issues)
    }
}

/// Validate a single drug-use event.
///
/// Fails when neither a last-use date nor the unknown marker is present.
pub fn validate_drug_use(event: &DrugUseEvent) -> Result<(), ValidationIssue> {
    if event.last_use.is_none() && !event.last_use_unknown {
        return Err(ValidationIssue::new(
            Section::Three,
            "Please specify a date for this drug use, or tick the box to say the timing is unknown",
        ));
    }
    Ok(())
}

/// Validate a single child record of any kind.
///
/// Only drug-use events carry a failure condition; the three classifying
/// kinds act purely through the flag auto-corrections on the case.
pub fn validate_child(child: &ChildRecord) -> Result<(), ValidationIssue> {
    match child {
        ChildRecord::DrugUse(event) => validate_drug_use(event),
        ChildRecord::Pregnancy(_) | ChildRecord::HeartDisease(_) | ChildRecord::Medical(_) => {
            Ok(())
        }
    }
}

/// Run the full pass over a bundle: the case-level checks plus every child
/// record, collecting everything into one report.
///
/// Child issues surface independently of case issues; the form layer shows
/// them together before a submission can complete.
pub fn validate_bundle(bundle: &mut CaseBundle, options: &ValidationOptions) -> ValidationReport {
    let mut report = ValidationReport::default();
    if let Err(issues) = validate_case(&mut bundle.case, &bundle.children, options) {
        report.issues.extend(issues);
    }
    for event in &bundle.children.drug_use_events {
        if let Err(issue) = validate_drug_use(event) {
            report.issues.push(issue);
        }
    }
    report
}

#[cfg(test)]
pub(crate) mod test_fixtures {
    use caps_model::{Answer, CaseRecord, MaritalStatus, Reporter, SmokingStatus};
    use chrono::{TimeZone, Utc};

    /// A case that passes every check, for tests to perturb.
    pub fn valid_case() -> CaseRecord {
        CaseRecord {
            case_id: "C0001".to_string(),
            case_reported: None,
            created_by: Reporter {
                username: "jsmith".to_string(),
                first_name: "Jo".to_string(),
                last_name: "Smith".to_string(),
            },
            created_on: Utc.with_ymd_and_hms(2014, 6, 1, 9, 0, 0).unwrap(),
            year_of_birth: 1985,
            ethnic_group: 1,
            marital_status: MaritalStatus::Married,
            employed: false,
            occupation: None,
            height_cm: 165,
            weight_kg: 68.5,
            smoking: SmokingStatus::Never,
            gravidity_24plus: 0,
            gravidity_24minus: 0,
            previous_pregnancy_problem: Answer::No,
            heart_disease: false,
            cardiac_arrest: false,
            cardiac_arrest_date: None,
            cardiac_arrest_cause: None,
            drug_use: false,
            previous_medical_problem: false,
        }
    }
}
