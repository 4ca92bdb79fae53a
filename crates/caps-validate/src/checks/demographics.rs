//! Section 1 checks: field ranges and the employment/occupation cross-check.

use chrono::Datelike;

use caps_model::{
    CaseRecord, HEIGHT_RANGE_CM, MIN_YEAR_OF_BIRTH, Section, ValidationIssue, WEIGHT_RANGE_KG,
};

use crate::options::ValidationOptions;

pub fn check(case: &CaseRecord, options: &ValidationOptions, issues: &mut Vec<ValidationIssue>) {
    if case.case_id.trim().is_empty() {
        issues.push(ValidationIssue::new(
            Section::One,
            "Please enter an ID number for the case",
        ));
    }
    let max_year = options.today.year();
    if case.year_of_birth < MIN_YEAR_OF_BIRTH || case.year_of_birth > max_year {
        issues.push(ValidationIssue::new(
            Section::One,
            format!("Year of birth must be between {MIN_YEAR_OF_BIRTH} and {max_year}"),
        ));
    }
    if !HEIGHT_RANGE_CM.contains(&case.height_cm) {
        issues.push(ValidationIssue::new(
            Section::One,
            format!(
                "Height must be between {} and {} cm",
                HEIGHT_RANGE_CM.start(),
                HEIGHT_RANGE_CM.end()
            ),
        ));
    }
    if !WEIGHT_RANGE_KG.contains(&case.weight_kg) {
        issues.push(ValidationIssue::new(
            Section::One,
            format!(
                "Weight must be between {} and {} kg",
                WEIGHT_RANGE_KG.start(),
                WEIGHT_RANGE_KG.end()
            ),
        ));
    }
    if case.employed && !case.has_occupation() {
        issues.push(ValidationIssue::new(
            Section::One,
            "Please enter occupation details for the woman",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::valid_case;

    #[test]
    fn employed_without_occupation_is_an_issue() {
        let mut case = valid_case();
        case.employed = true;
        case.occupation = Some(String::new());
        let mut issues = Vec::new();
        check(&case, &ValidationOptions::default(), &mut issues);
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].message,
            "Please enter occupation details for the woman"
        );
    }

    #[test]
    fn employed_with_occupation_is_clean() {
        let mut case = valid_case();
        case.employed = true;
        case.occupation = Some("Midwife".to_string());
        let mut issues = Vec::new();
        check(&case, &ValidationOptions::default(), &mut issues);
        assert!(issues.is_empty());
    }

    #[test]
    fn out_of_range_fields_are_each_reported() {
        let mut case = valid_case();
        case.year_of_birth = 1850;
        case.height_cm = 50;
        case.weight_kg = 10.0;
        let mut issues = Vec::new();
        check(&case, &ValidationOptions::default(), &mut issues);
        assert_eq!(issues.len(), 3);
        assert!(issues.iter().all(|issue| issue.section == Section::One));
    }
}
