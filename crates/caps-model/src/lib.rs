pub mod case;
pub mod catalog;
pub mod children;
pub mod drug;
pub mod enums;
pub mod error;
pub mod issue;
pub mod kinds;

pub use case::{
    CaseRecord, HEIGHT_RANGE_CM, MAX_GRAVIDITY, MIN_YEAR_OF_BIRTH, Reporter, WEIGHT_RANGE_KG,
};
pub use catalog::{Catalog, ethnic_group_heading, ethnic_group_label, label_for};
pub use children::{
    CaseBundle, ChildRecord, ChildRecords, DrugUseEvent, HeartDiseaseFactor, MedicalProblem,
    PregnancyProblem,
};
pub use drug::{Drug, DrugKind, UkClass};
pub use enums::{Answer, MaritalStatus, SmokingStatus, yes_no};
pub use error::{ModelError, Result};
pub use issue::{Section, ValidationIssue, ValidationReport};
pub use kinds::{HeartDiseaseFactorKind, MedicalProblemKind, PregnancyProblemKind};
