pub mod storage_error;

pub use storage_error::StorageError;

/// Top-level error type for the Skillwise workspace.
#[derive(Debug, thiserror::Error)]
pub enum SkillwiseError {
    #[error("skill not found: {id}")]
    SkillNotFound { id: String },

    #[error("invalid {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("storage error: {0}")]
    StorageError(#[from] StorageError),
}

impl SkillwiseError {
    /// Shorthand for an input validation failure.
    pub fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

pub type SkillwiseResult<T> = Result<T, SkillwiseError>;
