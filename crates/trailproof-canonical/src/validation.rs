use thiserror::Error;

/// Validation errors for trail inputs and configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// When a value does not match the required pattern.
    #[error("{field} ('{value}') is not allowed")]
    PatternMismatch {
        /// Field name that failed validation.
        field: &'static str,
        /// Offending value.
        value: String,
    },
    /// A required field is absent or empty.
    #[error("missing required field: {field} is required")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },
    /// The event payload is not a JSON object.
    #[error("invalid payload: expected a JSON object, got {kind}")]
    PayloadNotObject {
        /// JSON kind that was supplied instead.
        kind: &'static str,
    },
    /// Unknown backend selector.
    #[error("invalid store type: '{value}' is not supported")]
    UnsupportedStore {
        /// Selector that was supplied.
        value: String,
    },
    /// The durable backend was selected without a file path.
    #[error("missing required parameter: path is required for jsonl store")]
    MissingStorePath,
}
