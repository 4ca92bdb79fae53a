use thiserror::Error;

use caps_model::ValidationIssue;

use crate::CaseId;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The validation pass found issues; nothing was stored.
    #[error("case rejected with {} validation issue(s)", .0.len())]
    Rejected(Vec<ValidationIssue>),
    #[error("no case with id {0}")]
    UnknownCase(CaseId),
}

impl StoreError {
    /// The issues behind a rejection, empty for other variants.
    pub fn issues(&self) -> &[ValidationIssue] {
        match self {
            StoreError::Rejected(issues) => issues,
            StoreError::UnknownCase(_) => &[],
        }
    }
}
