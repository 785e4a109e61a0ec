use thiserror::Error;

/// Errors produced by the portable record codec.
///
/// [`CodecError::Json`] is structural (the payload is not well-formed JSON);
/// every other variant is a schema rule failure on a well-formed payload.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Payload is not well-formed JSON.
    #[error("invalid JSON format: {0}")]
    Json(#[from] serde_json::Error),
    /// The mandatory name field is missing or not a string.
    #[error("missing or invalid \"name\" field")]
    MissingName,
    /// Name is outside the allowed length bound.
    #[error("name must be between {min} and {max} characters")]
    NameLength {
        /// Lower bound, inclusive.
        min: usize,
        /// Upper bound, inclusive.
        max: usize,
    },
    /// Email field is present but not shaped `local@domain`.
    #[error("invalid email format: '{value}'")]
    InvalidEmail {
        /// Offending value.
        value: String,
    },
}

impl CodecError {
    /// True for structural parse failures, false for schema rule failures.
    pub fn is_structural(&self) -> bool {
        matches!(self, Self::Json(_))
    }
}

/// Errors produced while transforming a form into a domain record.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A custom field entry with one side filled and the other blank.
    #[error("custom field ('{key}', '{value}') must have both key and value set or both empty")]
    MismatchedCustomField {
        /// Entry key, possibly empty.
        key: String,
        /// Entry value, possibly empty.
        value: String,
    },
}
