//! Section 2 checks: consistency between the pregnancy-problem records, the
//! previous-problems answer, and the gravidity counts.
//!
//! Three sub-cases. With problem records present the answer has already been
//! auto-corrected to Yes, so only the gravidity counts can still be wrong.
//! With the answer at Yes but no records, at least one problem must be
//! described and the gravidity counts must show a pregnancy. And once any
//! gravidity count is nonzero the question must not be left unanswered.

use caps_model::{CaseRecord, ChildRecords, MAX_GRAVIDITY, Section, ValidationIssue};

const NO_PREGNANCIES_MSG: &str =
    "No previous pregnancies have been entered. Please correct the number of previous pregnancies.";

pub fn check(case: &CaseRecord, children: &ChildRecords, issues: &mut Vec<ValidationIssue>) {
    if case.gravidity_24plus > MAX_GRAVIDITY || case.gravidity_24minus > MAX_GRAVIDITY {
        issues.push(ValidationIssue::new(
            Section::Two,
            format!("Number of previous pregnancies cannot exceed {MAX_GRAVIDITY}"),
        ));
    }

    if !children.pregnancy_problems.is_empty() {
        if !case.has_previous_pregnancies() {
            issues.push(ValidationIssue::new(Section::Two, NO_PREGNANCIES_MSG));
        }
    } else if case.previous_pregnancy_problem.is_yes() {
        issues.push(ValidationIssue::new(
            Section::Two,
            "Please enter more information about previous pregnancy problems.",
        ));
        if !case.has_previous_pregnancies() {
            issues.push(ValidationIssue::new(Section::Two, NO_PREGNANCIES_MSG));
        }
    }

    if case.has_previous_pregnancies() && !case.previous_pregnancy_problem.is_answered() {
        issues.push(ValidationIssue::new(
            Section::Two,
            "Please indicate whether there were any previous pregnancy problems",
        ));
    }
}
