//! Transport-facing response shapes.
//!
//! Handlers pick a [`ResponseType`] per outcome and serialize either the payload
//! or an [`ErrorEnvelope`]. The CLI `--json` mode prints the same shapes.

use crate::error::{AidreqError, ErrorKind};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseType {
    Ok,
    Created,
    InvalidInput,
    NotFound,
    UnknownError,
}

impl ResponseType {
    pub fn status_code(&self) -> u16 {
        match self {
            ResponseType::Ok => 200,
            ResponseType::Created => 201,
            ResponseType::InvalidInput => 400,
            ResponseType::NotFound => 404,
            ResponseType::UnknownError => 500,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status_code() < 400
    }
}

impl From<ErrorKind> for ResponseType {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::InvalidInput => ResponseType::InvalidInput,
            ErrorKind::NotFound => ResponseType::NotFound,
            ErrorKind::UnknownError => ResponseType::UnknownError,
        }
    }
}

/// Body returned for any failed operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEnvelope {
    pub error: ResponseType,
    pub message: String,
}

impl ErrorEnvelope {
    pub fn status_code(&self) -> u16 {
        self.error.status_code()
    }
}

impl From<&AidreqError> for ErrorEnvelope {
    fn from(err: &AidreqError) -> Self {
        let error = ResponseType::from(err.kind());
        // Internal failure details stay in the logs.
        let message = match error {
            ResponseType::UnknownError => "An unexpected error occurred".to_string(),
            _ => err.to_string(),
        };
        Self { error, message }
    }
}
