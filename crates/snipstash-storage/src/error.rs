use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("snippet not found: {id}")]
    NotFound { id: String },

    #[error("MongoDB error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("invalid stored timestamp: {0}")]
    InvalidTimestamp(#[from] jiff::Error),

    #[error("upsert retries exhausted for filename: {filename}")]
    UpsertRetriesExhausted { filename: String },

    #[error("unknown storage backend: {0}")]
    UnknownBackend(String),
}
