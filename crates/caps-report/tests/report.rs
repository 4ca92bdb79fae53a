//! Integration tests for the CSV case listing.

use chrono::{NaiveDate, TimeZone, Utc};

use caps_model::{
    Answer, CaseBundle, CaseRecord, ChildRecords, MaritalStatus, Reporter, SmokingStatus,
};
use caps_report::{LISTING_COLUMNS, write_case_listing};
use caps_store::CaseStore;
use caps_validate::ValidationOptions;

fn case(case_id: &str, hour: u32) -> CaseRecord {
    CaseRecord {
        case_id: case_id.to_string(),
        case_reported: None,
        created_by: Reporter {
            username: "jsmith".to_string(),
            first_name: "Jo".to_string(),
            last_name: "Smith".to_string(),
        },
        created_on: Utc.with_ymd_and_hms(2014, 6, 1, hour, 0, 0).unwrap(),
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

fn store_with_two_cases() -> CaseStore {
    let mut store = CaseStore::with_options(
        ValidationOptions::default()
            .with_today(NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date")),
    );

    let mut first = case("C0001", 9);
    first.smoking = SmokingStatus::During;
    first.previous_medical_problem = true;
    store
        .create(CaseBundle {
            case: first,
            children: ChildRecords::default(),
        })
        .expect("valid bundle");

    let mut second = case("C0002", 14);
    second.previous_pregnancy_problem = Answer::NotAnswered;
    second.cardiac_arrest = true;
    second.cardiac_arrest_date = NaiveDate::from_ymd_opt(2013, 5, 20);
    store
        .create(CaseBundle {
            case: second,
            children: ChildRecords::default(),
        })
        .expect("valid bundle");

    store
}

#[test]
fn header_row_matches_the_fixed_column_order() {
    let store = CaseStore::new();
    let mut output = Vec::new();
    write_case_listing(&store.list_all(), &mut output).expect("write listing");
    let text = String::from_utf8(output).expect("utf8");
    assert_eq!(text.trim_end(), LISTING_COLUMNS.join(","));
}

#[test]
fn listing_denormalizes_labels_and_flags() {
    let store = store_with_two_cases();
    let mut output = Vec::new();
    write_case_listing(&store.list_all(), &mut output).expect("write listing");
    let text = String::from_utf8(output).expect("utf8");

    insta::assert_snapshot!(text, @r"
    case_id,created_by,created_on,smoking,previous_pregnancy_problem,heart_disease,cardiac_arrest,drug_use,previous_medical_problem
    C0001,Jo Smith,2014-06-01 09:00:00,Gave up during pregnancy,No,No,No,No,Yes
    C0002,Jo Smith,2014-06-01 14:00:00,Never,,No,Yes,No,No
    ");
}

#[test]
fn unanswered_tri_state_renders_as_empty_field() {
    let store = store_with_two_cases();
    let mut output = Vec::new();
    write_case_listing(&store.list_all(), &mut output).expect("write listing");
    let text = String::from_utf8(output).expect("utf8");
    let second_row = text.lines().nth(2).expect("two data rows");
    let fields: Vec<&str> = second_row.split(',').collect();
    assert_eq!(fields[4], "");
    assert_eq!(fields[6], "Yes");
}
