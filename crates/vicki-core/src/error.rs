use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("duplicate patient id: {0}")]
    DuplicatePatient(String),

    #[error("risk score for patient {id} must be between 0 and 100 (got {value})")]
    InvalidRiskScore { id: String, value: f64 },

    #[error("unknown sort field: {0}")]
    InvalidSortField(String),

    #[error("unknown sort order: {0}")]
    InvalidSortOrder(String),
}
