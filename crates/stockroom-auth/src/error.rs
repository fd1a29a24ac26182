//! Authentication error types.

use stockroom_core::error::StockroomError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("persisted session is malformed: {0}")]
    MalformedPersistedSession(String),

    #[error("{0}")]
    Validation(String),

    #[error("authentication directory error: {0}")]
    Directory(String),

    #[error("session storage error: {0}")]
    Storage(String),

    #[error("cryptography error: {0}")]
    Crypto(String),
}

impl From<AuthError> for StockroomError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials | AuthError::MalformedPersistedSession(_) => {
                StockroomError::AuthenticationFailed {
                    reason: err.to_string(),
                }
            }
            AuthError::Validation(message) => StockroomError::Validation { message },
            AuthError::Directory(msg) => StockroomError::Internal(msg),
            AuthError::Storage(msg) => StockroomError::Storage(msg),
            AuthError::Crypto(msg) => StockroomError::Crypto(msg),
        }
    }
}
