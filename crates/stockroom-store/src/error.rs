//! Storage-specific error types and conversions.

use stockroom_core::error::StockroomError;

/// Storage-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },
}

impl From<StoreError> for StockroomError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => StockroomError::NotFound { entity, id },
            StoreError::Hashing(msg) => StockroomError::Crypto(msg),
            other => StockroomError::Storage(other.to_string()),
        }
    }
}
