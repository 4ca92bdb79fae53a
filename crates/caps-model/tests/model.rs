//! Tests for caps-model types.

use chrono::{TimeZone, Utc};

use caps_model::{
    Answer, CaseBundle, CaseRecord, ChildRecords, Drug, DrugUseEvent, MaritalStatus,
    MedicalProblem, MedicalProblemKind, PregnancyProblem, PregnancyProblemKind, Reporter,
    SmokingStatus,
};

fn sample_case() -> CaseRecord {
    CaseRecord {
        case_id: "C0042".to_string(),
        case_reported: Some("Local press".to_string()),
        created_by: Reporter {
            username: "jsmith".to_string(),
            first_name: "Jo".to_string(),
            last_name: "Smith".to_string(),
        },
        created_on: Utc.with_ymd_and_hms(2014, 6, 1, 9, 30, 0).unwrap(),
        year_of_birth: 1982,
        ethnic_group: 9,
        marital_status: MaritalStatus::Cohabiting,
        employed: true,
        occupation: Some("Teacher".to_string()),
        height_cm: 170,
        weight_kg: 74.0,
        smoking: SmokingStatus::Prior,
        gravidity_24plus: 1,
        gravidity_24minus: 0,
        previous_pregnancy_problem: Answer::Yes,
        heart_disease: false,
        cardiac_arrest: false,
        cardiac_arrest_date: None,
        cardiac_arrest_cause: None,
        drug_use: false,
        previous_medical_problem: true,
    }
}

#[test]
fn case_display_includes_id_timestamp_and_reporter() {
    let case = sample_case();
    assert_eq!(
        case.to_string(),
        "Case ID C0042 created on 2014-06-01 09:30:00 by Jo Smith"
    );
}

#[test]
fn bundle_round_trips_through_json() {
    let bundle = CaseBundle {
        case: sample_case(),
        children: ChildRecords {
            pregnancy_problems: vec![PregnancyProblem {
                kind: PregnancyProblemKind::GestationalDiabetes,
                details: None,
            }],
            heart_disease_factors: vec![],
            drug_use_events: vec![DrugUseEvent {
                drug: Drug::named("Cannabis"),
                last_use: None,
                last_use_unknown: true,
            }],
            medical_problems: vec![MedicalProblem {
                kind: MedicalProblemKind::RenalDisease,
                details: Some("Diagnosed 2010".to_string()),
            }],
        },
    };
    let json = serde_json::to_string_pretty(&bundle).expect("serialize bundle");
    let round: CaseBundle = serde_json::from_str(&json).expect("deserialize bundle");
    assert_eq!(round.case.case_id, "C0042");
    assert_eq!(round.children.pregnancy_problems.len(), 1);
    assert_eq!(
        round.children.pregnancy_problems[0].kind,
        PregnancyProblemKind::GestationalDiabetes
    );
    assert!(round.children.drug_use_events[0].last_use_unknown);
}

#[test]
fn bundle_children_default_when_absent() {
    let json = serde_json::to_string(&sample_case()).expect("serialize case");
    let wrapped = format!("{{\"case\":{json}}}");
    let bundle: CaseBundle = serde_json::from_str(&wrapped).expect("deserialize bundle");
    assert!(bundle.children.is_empty());
}

#[test]
fn kind_codes_are_stable_in_json() {
    let problem = PregnancyProblem {
        kind: PregnancyProblemKind::PostPartumHaemorrhage,
        details: None,
    };
    let json = serde_json::to_value(&problem).expect("serialize problem");
    assert_eq!(json["kind"], "postparthaemor");
}
