use thiserror::Error;

/// Errors produced while loading data, growing a tree or using it.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),

    #[error("internal consistency violated: {0}")]
    InternalConsistency(String),

    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("the tree has not been fitted")]
    NotFitted,

    #[error("attribute {attribute} has no branch for value '{value}'")]
    UnseenValue { attribute: usize, value: String },

    #[error("expected {expected} values, found {found}")]
    LengthMismatch { expected: usize, found: usize },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}
