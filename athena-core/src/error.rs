//! Error types for athena-core.

/// Assistant errors.
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    #[error("Response depth {0} is outside 1-5")]
    InvalidDepth(u8),

    #[error("Preference store I/O failed: {0}")]
    StoreIo(#[from] std::io::Error),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Speech output unavailable: {0}")]
    SpeechUnavailable(String),

    #[error("Export failed: {0}")]
    ExportFailed(String),
}

impl From<AssistantError> for athena_common::Error {
    fn from(err: AssistantError) -> Self {
        match err {
            AssistantError::InvalidDepth(_) => Self::InvalidInput(err.to_string()),
            AssistantError::StoreIo(e) => Self::Io(e),
            AssistantError::Serialization(e) => Self::Json(e),
            other => Self::Internal(other.to_string()),
        }
    }
}

/// Result alias for assistant operations.
pub type AssistantResult<T> = Result<T, AssistantError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            AssistantError::InvalidDepth(9).to_string(),
            "Response depth 9 is outside 1-5"
        );
    }

    #[test]
    fn test_into_common_error() {
        let err: athena_common::Error = AssistantError::InvalidDepth(0).into();
        assert_eq!(err.status_code(), 400);

        let err: athena_common::Error =
            AssistantError::SpeechUnavailable("no engine".into()).into();
        assert_eq!(err.status_code(), 500);
    }
}
