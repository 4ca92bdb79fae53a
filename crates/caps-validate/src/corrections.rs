//! Auto-corrections: derived flags set from child-record presence.
//!
//! These mutate the in-memory case before the checks run and are never
//! reported as failures. Recording a classifying child is taken as an
//! implicit Yes to the matching question.

use caps_model::{Answer, CaseRecord, ChildRecords};
use tracing::debug;

use crate::options::{DrugUsePolicy, ValidationOptions};

pub fn apply(case: &mut CaseRecord, children: &ChildRecords, options: &ValidationOptions) {
    if !children.pregnancy_problems.is_empty() && case.previous_pregnancy_problem != Answer::Yes {
        debug!(case_id = %case.case_id, "pregnancy problems recorded, answer corrected to yes");
        case.previous_pregnancy_problem = Answer::Yes;
    }
    if !children.heart_disease_factors.is_empty() && !case.heart_disease {
        debug!(case_id = %case.case_id, "heart disease factors recorded, flag corrected");
        case.heart_disease = true;
    }
    if !children.medical_problems.is_empty() && !case.previous_medical_problem {
        debug!(case_id = %case.case_id, "medical problems recorded, flag corrected");
        case.previous_medical_problem = true;
    }
    if options.drug_use_policy == DrugUsePolicy::Propagate
        && !children.drug_use_events.is_empty()
        && !case.drug_use
    {
        debug!(case_id = %case.case_id, "drug use recorded, flag corrected under propagate policy");
        case.drug_use = true;
    }
    if !case.cardiac_arrest && case.cardiac_arrest_date.is_some() {
        debug!(case_id = %case.case_id, "cardiac arrest date present, flag corrected");
        case.cardiac_arrest = true;
    }
}
