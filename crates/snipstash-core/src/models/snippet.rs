use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// A named text snippet as stored and as returned on the wire.
///
/// The timestamp is refreshed on every write, not just at creation — it is
/// the sort key for "newest first" listings. The wire name stays `createdAt`
/// for compatibility with the existing browser client.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Snippet {
    pub id: String,
    pub filename: String,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub last_written_at: jiff::Timestamp,
}

/// Validated input for the upsert operation.
///
/// Construction is the validation boundary: both fields must be non-empty.
/// Whitespace-only values are accepted; trimming is a client-side courtesy,
/// never a server-enforced rule.
#[derive(Debug, Clone)]
pub struct NewSnippet {
    filename: String,
    content: String,
}

impl NewSnippet {
    pub fn new(
        filename: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let filename = filename.into();
        let content = content.into();

        if filename.is_empty() {
            return Err(CoreError::MissingField("filename".to_string()));
        }
        if content.is_empty() {
            return Err(CoreError::MissingField("content".to_string()));
        }

        Ok(Self { filename, content })
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Whether an upsert created a new snippet or replaced an existing one.
#[derive(Debug, Clone)]
pub enum UpsertOutcome {
    Created(Snippet),
    Updated(Snippet),
}

impl UpsertOutcome {
    pub fn snippet(&self) -> &Snippet {
        match self {
            UpsertOutcome::Created(s) | UpsertOutcome::Updated(s) => s,
        }
    }

    pub fn into_snippet(self) -> Snippet {
        match self {
            UpsertOutcome::Created(s) | UpsertOutcome::Updated(s) => s,
        }
    }
}
