use crate::validation::ValidationError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AidreqError {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    #[error("Request not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Config error: {0}")]
    Config(String),
}

/// The three failure classes a caller can observe.
///
/// Everything that is not the caller's fault collapses into `UnknownError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    InvalidInput,
    NotFound,
    UnknownError,
}

impl AidreqError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AidreqError::InvalidInput(_) => ErrorKind::InvalidInput,
            AidreqError::NotFound(_) => ErrorKind::NotFound,
            AidreqError::Io(_)
            | AidreqError::Serialization(_)
            | AidreqError::Store(_)
            | AidreqError::Config(_) => ErrorKind::UnknownError,
        }
    }

    /// Client errors are never retried; unknown errors may be.
    pub fn is_client_error(&self) -> bool {
        self.kind() != ErrorKind::UnknownError
    }
}

pub type Result<T> = std::result::Result<T, AidreqError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::status::RequestStatus;

    #[test]
    fn validation_failures_are_invalid_input() {
        let err: AidreqError = ValidationError::PageOutOfRange(0).into();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert!(err.is_client_error());
    }

    #[test]
    fn refused_transitions_are_invalid_input() {
        let err: AidreqError = ValidationError::IllegalTransition {
            from: RequestStatus::Completed,
            to: RequestStatus::Pending,
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
        assert_eq!(
            err.to_string(),
            "Invalid input: cannot move request from completed to pending"
        );
    }

    #[test]
    fn persistence_failures_are_unknown() {
        let err = AidreqError::Store("disk on fire".into());
        assert_eq!(err.kind(), ErrorKind::UnknownError);
        assert!(!err.is_client_error());

        let io = AidreqError::Io(std::io::Error::other("boom"));
        assert_eq!(io.kind(), ErrorKind::UnknownError);
    }

    #[test]
    fn not_found_keeps_the_id() {
        let err = AidreqError::NotFound("abc".into());
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "Request not found: abc");
    }
}
