//! In-memory SnippetStore implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use snipstash_core::models::{NewSnippet, Snippet, UpsertOutcome};

use crate::{Result, SnippetStore, StorageError};

/// In-process snippet store for local development and tests.
///
/// Keyed by filename, so one-document-per-filename holds structurally;
/// the single lock makes each upsert atomic. Ids are minted as ObjectId
/// hex so they are format-identical to the MongoDB backend's.
#[derive(Default)]
pub struct MemorySnippetStore {
    files: RwLock<HashMap<String, Snippet>>,
}

impl MemorySnippetStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SnippetStore for MemorySnippetStore {
    async fn upsert(
        &self,
        input: &NewSnippet,
        written_at: jiff::Timestamp,
    ) -> Result<UpsertOutcome> {
        let mut files = self.files.write().await;

        if let Some(existing) = files.get_mut(input.filename()) {
            existing.content = input.content().to_string();
            existing.last_written_at = written_at;
            return Ok(UpsertOutcome::Updated(existing.clone()));
        }

        let snippet = Snippet {
            id: ObjectId::new().to_hex(),
            filename: input.filename().to_string(),
            content: input.content().to_string(),
            last_written_at: written_at,
        };
        files.insert(snippet.filename.clone(), snippet.clone());

        Ok(UpsertOutcome::Created(snippet))
    }

    async fn list(&self) -> Result<Vec<Snippet>> {
        let files = self.files.read().await;

        let mut snippets: Vec<Snippet> = files.values().cloned().collect();
        snippets.sort_by(|a, b| b.last_written_at.cmp(&a.last_written_at));

        Ok(snippets)
    }

    async fn get(&self, id: &str) -> Result<Snippet> {
        let files = self.files.read().await;

        files
            .values()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound { id: id.to_string() })
    }
}
