use thiserror::Error;

/// Failures surfaced while turning an authoring payload into a form schema.
///
/// Everything past schema construction degrades in place instead of
/// erroring: undecodable option lists become empty options, unreachable
/// follow-up branches are skipped, and malformed correct-answer keys make a
/// question unanswerable-correctly without aborting grading.
#[derive(Debug, Clone, Error)]
pub enum SchemaError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Question at position {position} is missing `{field}`")]
    MissingField {
        field: &'static str,
        position: usize,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),
}

impl From<serde_json::Error> for SchemaError {
    fn from(err: serde_json::Error) -> Self {
        SchemaError::MalformedPayload(err.to_string())
    }
}

impl From<validator::ValidationErrors> for SchemaError {
    fn from(err: validator::ValidationErrors) -> Self {
        SchemaError::ValidationError(err.to_string())
    }
}

pub type SchemaResult<T> = Result<T, SchemaError>;
