use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown marital status: {0}")]
    UnknownMaritalStatus(String),
    #[error("unknown smoking status: {0}")]
    UnknownSmokingStatus(String),
    #[error("unknown answer: {0}")]
    UnknownAnswer(String),
    #[error("unknown UK drug classification: {0}")]
    UnknownUkClass(String),
    #[error("unknown drug kind: {0}")]
    UnknownDrugKind(String),
    #[error("unknown problem code: {0}")]
    UnknownProblemCode(String),
    #[error("unknown catalog: {0}")]
    UnknownCatalog(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
