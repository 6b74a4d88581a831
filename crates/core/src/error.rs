/// Errors raised by scoring functions.
///
/// `InvalidInput` is the only variant a scoring function should raise
/// deliberately: it marks a cross-field/business-rule violation in an
/// otherwise well-typed request and is surfaced to the client as a 422.
/// The parameter-access variants indicate that a scoring function was handed
/// a `ParameterSet` that did not satisfy its static schema; schema validation
/// happens in the HTTP layer, so these are treated as internal faults.
#[derive(Debug, thiserror::Error)]
pub enum ScoreError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("missing parameter '{0}'")]
    MissingParameter(&'static str),
    #[error("parameter '{name}' {reason}")]
    InvalidParameter { name: &'static str, reason: String },
    #[error("failed to serialize parameters: {0}")]
    Serialization(serde_json::Error),
}

impl ScoreError {
    /// Business-rule violation with the given message.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        ScoreError::InvalidInput(message.into())
    }
}

pub type CalcResult<T> = std::result::Result<T, ScoreError>;
