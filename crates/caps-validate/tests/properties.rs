//! Property tests for the iff-style validation rules.

use chrono::{NaiveDate, TimeZone, Utc};
use proptest::prelude::*;

use caps_model::{
    Answer, CaseRecord, ChildRecords, Drug, DrugUseEvent, MaritalStatus, PregnancyProblem,
    PregnancyProblemKind, Reporter, Section, SmokingStatus,
};
use caps_validate::{ValidationOptions, validate_case, validate_drug_use};

fn base_case() -> CaseRecord {
    CaseRecord {
        case_id: "C0001".to_string(),
        case_reported: None,
        created_by: Reporter {
            username: "jsmith".to_string(),
            first_name: String::new(),
            last_name: String::new(),
        },
        created_on: Utc.with_ymd_and_hms(2014, 6, 1, 9, 0, 0).unwrap(),
        year_of_birth: 1985,
        ethnic_group: 1,
        marital_status: MaritalStatus::Single,
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

fn options() -> ValidationOptions {
    ValidationOptions::default()
        .with_today(NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date"))
}

fn answer_strategy() -> impl Strategy<Value = Answer> {
    prop_oneof![
        Just(Answer::Yes),
        Just(Answer::No),
        Just(Answer::NotAnswered),
    ]
}

proptest! {
    /// Employed cases fail on Section 1 iff the occupation is blank.
    #[test]
    fn employment_check_is_iff(occupation in proptest::option::of("[ a-zA-Z]{0,12}")) {
        let mut case = base_case();
        case.employed = true;
        case.occupation = occupation.clone();
        let result = validate_case(&mut case, &ChildRecords::default(), &options());
        let blank = occupation.as_deref().is_none_or(|text| text.trim().is_empty());
        if blank {
            let issues = result.expect_err("blank occupation must be rejected");
            prop_assert!(issues.iter().any(|issue| issue.section == Section::One));
        } else {
            prop_assert!(result.is_ok());
        }
    }

    /// A drug-use event fails iff it has neither a date nor the unknown marker.
    #[test]
    fn drug_use_check_is_iff(has_date in any::<bool>(), unknown in any::<bool>()) {
        let event = DrugUseEvent {
            drug: Drug::named("Cocaine"),
            last_use: has_date.then(|| Utc.with_ymd_and_hms(2014, 1, 1, 0, 0, 0).unwrap()),
            last_use_unknown: unknown,
        };
        prop_assert_eq!(validate_drug_use(&event).is_err(), !has_date && !unknown);
    }

    /// With a pregnancy problem recorded, the answer always ends up Yes and
    /// the pass fails iff both gravidity counts are zero.
    #[test]
    fn pregnancy_problem_presence(
        plus in 0u8..=20,
        minus in 0u8..=20,
        answer in answer_strategy(),
    ) {
        let mut case = base_case();
        case.gravidity_24plus = plus;
        case.gravidity_24minus = minus;
        case.previous_pregnancy_problem = answer;
        let children = ChildRecords {
            pregnancy_problems: vec![PregnancyProblem {
                kind: PregnancyProblemKind::Stillbirth,
                details: None,
            }],
            ..ChildRecords::default()
        };
        let result = validate_case(&mut case, &children, &options());
        prop_assert_eq!(case.previous_pregnancy_problem, Answer::Yes);
        prop_assert_eq!(result.is_err(), plus == 0 && minus == 0);
    }

    /// A nonzero gravidity count with the question unanswered always fails.
    #[test]
    fn gravidity_requires_an_answer(plus in 0u8..=20, minus in 0u8..=20) {
        let mut case = base_case();
        case.gravidity_24plus = plus;
        case.gravidity_24minus = minus;
        case.previous_pregnancy_problem = Answer::NotAnswered;
        let result = validate_case(&mut case, &ChildRecords::default(), &options());
        prop_assert_eq!(result.is_err(), plus > 0 || minus > 0);
    }

    /// A pre-set cardiac arrest date never fails on its own: the flag is
    /// corrected instead.
    #[test]
    fn cardiac_date_corrects_flag(flag in any::<bool>()) {
        let mut case = base_case();
        case.cardiac_arrest = flag;
        case.cardiac_arrest_date = NaiveDate::from_ymd_opt(2013, 2, 3);
        let result = validate_case(&mut case, &ChildRecords::default(), &options());
        prop_assert!(result.is_ok());
        prop_assert!(case.cardiac_arrest);
    }

    /// In-range demographics never trip the range checks.
    #[test]
    fn in_range_demographics_pass(
        year in 1900i32..=2024,
        height in 90u32..=300,
        weight in 30.0f64..=300.0,
    ) {
        let mut case = base_case();
        case.year_of_birth = year;
        case.height_cm = height;
        case.weight_kg = weight;
        prop_assert!(validate_case(&mut case, &ChildRecords::default(), &options()).is_ok());
    }
}
