//! MongoDB SnippetStore implementation.

use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::bson::oid::ObjectId;
use mongodb::bson::{self, doc};
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{FindOptions, IndexOptions, UpdateOptions};
use mongodb::{Client, Collection, IndexModel};
use serde::{Deserialize, Serialize};

use snipstash_core::models::{NewSnippet, Snippet, UpsertOutcome};

use crate::{Result, SnippetStore, StorageError};

/// Collection name.
const FILES_COLLECTION: &str = "files";

/// Attempts for an upsert that loses a create race on the unique index.
const UPSERT_ATTEMPTS: usize = 3;

/// Stored document schema.
///
/// `lastWrittenAt` is refreshed on every write; BSON datetimes carry
/// millisecond precision, so responses always equal a subsequent read.
#[derive(Debug, Serialize, Deserialize)]
struct SnippetDocument {
    #[serde(rename = "_id")]
    id: ObjectId,
    filename: String,
    content: String,
    #[serde(rename = "lastWrittenAt")]
    last_written_at: bson::DateTime,
}

impl SnippetDocument {
    fn into_snippet(self) -> Result<Snippet> {
        Ok(Snippet {
            id: self.id.to_hex(),
            filename: self.filename,
            content: self.content,
            last_written_at: jiff::Timestamp::from_millisecond(
                self.last_written_at.timestamp_millis(),
            )?,
        })
    }
}

/// MongoDB implementation of SnippetStore.
pub struct MongoSnippetStore {
    files: Collection<SnippetDocument>,
}

impl MongoSnippetStore {
    /// Create a new MongoDB snippet store.
    pub async fn new(client: &Client, database_name: &str) -> Result<Self> {
        let files = client.database(database_name).collection(FILES_COLLECTION);

        let store = Self { files };
        store.init().await?;

        Ok(store)
    }

    /// Initialize indexes.
    async fn init(&self) -> Result<()> {
        // Unique index on filename - at most one document per filename
        let index = IndexModel::builder()
            .keys(doc! { "filename": 1 })
            .options(IndexOptions::builder().unique(true).build())
            .build();

        self.files.create_index(index).await?;

        Ok(())
    }
}

#[async_trait]
impl SnippetStore for MongoSnippetStore {
    async fn upsert(
        &self,
        input: &NewSnippet,
        written_at: jiff::Timestamp,
    ) -> Result<UpsertOutcome> {
        let stored_at = bson::DateTime::from_millis(written_at.as_millisecond());

        let filter = doc! { "filename": input.filename() };
        let update = doc! {
            "$set": {
                "filename": input.filename(),
                "content": input.content(),
                "lastWrittenAt": stored_at,
            }
        };

        for _ in 0..UPSERT_ATTEMPTS {
            let options = UpdateOptions::builder().upsert(true).build();
            let result = self
                .files
                .update_one(filter.clone(), update.clone())
                .with_options(options)
                .await;

            match result {
                Ok(outcome) => {
                    if let Some(id) =
                        outcome.upserted_id.as_ref().and_then(|id| id.as_object_id())
                    {
                        return Ok(UpsertOutcome::Created(Snippet {
                            id: id.to_hex(),
                            filename: input.filename().to_string(),
                            content: input.content().to_string(),
                            last_written_at: jiff::Timestamp::from_millisecond(
                                stored_at.timestamp_millis(),
                            )?,
                        }));
                    }

                    // Matched an existing document: read back the stored state.
                    if let Some(doc) = self.files.find_one(filter.clone()).await? {
                        return Ok(UpsertOutcome::Updated(doc.into_snippet()?));
                    }
                    // Document vanished between the write and the read; retry.
                }
                // Two racing creates collide on the unique filename index;
                // the loser retries and resolves as an update.
                Err(e) if is_duplicate_key(&e) => {}
                Err(e) => return Err(e.into()),
            }
        }

        Err(StorageError::UpsertRetriesExhausted {
            filename: input.filename().to_string(),
        })
    }

    async fn list(&self) -> Result<Vec<Snippet>> {
        let options = FindOptions::builder()
            .sort(doc! { "lastWrittenAt": -1 })
            .build();

        let mut cursor = self.files.find(doc! {}).with_options(options).await?;

        let mut snippets = Vec::new();
        while let Some(doc) = cursor.try_next().await? {
            snippets.push(doc.into_snippet()?);
        }

        Ok(snippets)
    }

    async fn get(&self, id: &str) -> Result<Snippet> {
        // A string that does not parse as an ObjectId is indistinguishable
        // from an absent document, by contract.
        let oid = ObjectId::parse_str(id).map_err(|_| StorageError::NotFound {
            id: id.to_string(),
        })?;

        let doc = self
            .files
            .find_one(doc! { "_id": oid })
            .await?
            .ok_or_else(|| StorageError::NotFound { id: id.to_string() })?;

        doc.into_snippet()
    }
}

fn is_duplicate_key(err: &mongodb::error::Error) -> bool {
    matches!(
        *err.kind,
        ErrorKind::Write(WriteFailure::WriteError(ref we)) if we.code == 11000
    )
}
