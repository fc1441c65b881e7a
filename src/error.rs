//! Error types for fitstats

use thiserror::Error;

/// Coarse classification of a [`RecordError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Wrong number of comma-delimited fields
    Format,
    /// A field failed to parse as its expected type
    Type,
    /// User attributes unusable by the formulas
    Profile,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Format => "format",
            ErrorKind::Type => "type",
            ErrorKind::Profile => "profile",
        }
    }
}

/// Errors that can occur while turning a raw line into a summary
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("malformed record: expected {expected} comma-separated fields, got {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("invalid step count {0:?}: expected an integer")]
    InvalidStepCount(String),

    #[error("invalid duration {0:?}: expected a value like 3h50m")]
    InvalidDuration(String),

    #[error("invalid user profile: {0}")]
    InvalidProfile(String),

    #[error("invalid profile JSON: {0}")]
    ProfileJson(#[from] serde_json::Error),
}

impl RecordError {
    /// Which of the error families this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            RecordError::FieldCount { .. } => ErrorKind::Format,
            RecordError::InvalidStepCount(_) | RecordError::InvalidDuration(_) => ErrorKind::Type,
            RecordError::InvalidProfile(_) | RecordError::ProfileJson(_) => ErrorKind::Profile,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        let err = RecordError::FieldCount {
            expected: 2,
            found: 1,
        };
        assert_eq!(err.kind(), ErrorKind::Format);
        assert_eq!(
            RecordError::InvalidStepCount("abc".to_string()).kind(),
            ErrorKind::Type
        );
        assert_eq!(
            RecordError::InvalidDuration("x".to_string()).kind(),
            ErrorKind::Type
        );
        assert_eq!(
            RecordError::InvalidProfile("height".to_string()).kind(),
            ErrorKind::Profile
        );
    }

    #[test]
    fn test_error_messages() {
        let err = RecordError::FieldCount {
            expected: 3,
            found: 2,
        };
        assert_eq!(
            err.to_string(),
            "malformed record: expected 3 comma-separated fields, got 2"
        );
        assert_eq!(
            RecordError::InvalidDuration("10x".to_string()).to_string(),
            "invalid duration \"10x\": expected a value like 3h50m"
        );
    }
}
