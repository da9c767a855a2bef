//! snipstash-storage
//!
//! The document-store boundary: the `SnippetStore` trait, the MongoDB
//! backend, and an in-memory backend for local development and tests.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{error, info};

use snipstash_core::models::{NewSnippet, Snippet, UpsertOutcome};

pub mod error;
pub mod memory;
pub mod mongo;

pub use error::StorageError;
pub use memory::MemorySnippetStore;
pub use mongo::MongoSnippetStore;

/// Result type for storage operations.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Interface for snippet persistence.
///
/// Implementations:
/// - `MongoSnippetStore`: MongoDB collection, one document per filename
/// - `MemorySnippetStore`: in-process map for local development and tests
#[async_trait]
pub trait SnippetStore: Send + Sync {
    /// Create or replace the snippet with this filename.
    ///
    /// One logical write against the store; whether it created a new
    /// snippet or replaced an existing one is reported in the outcome.
    async fn upsert(
        &self,
        input: &NewSnippet,
        written_at: jiff::Timestamp,
    ) -> Result<UpsertOutcome>;

    /// Every stored snippet, most recently written first.
    async fn list(&self) -> Result<Vec<Snippet>>;

    /// The snippet with this id. `NotFound` covers both absent ids and ids
    /// the store cannot parse.
    async fn get(&self, id: &str) -> Result<Snippet>;
}

/// Initialize the configured store backend.
pub async fn init_store(
    backend: &str,
    uri: &str,
    database: &str,
) -> Result<Arc<dyn SnippetStore>> {
    info!("snippet store backend: {backend}");

    match backend {
        "mongodb" => {
            let client = mongodb::Client::with_uri_str(uri).await?;
            Ok(Arc::new(MongoSnippetStore::new(&client, database).await?))
        }
        "memory" => Ok(Arc::new(MemorySnippetStore::new())),
        other => {
            error!("unknown snippet store backend: {other}");
            Err(StorageError::UnknownBackend(other.to_string()))
        }
    }
}
