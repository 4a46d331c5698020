//! Memory endpoints: save, list, and semantic search.

use chrono::NaiveDateTime;
use echo_types::ClientError;
use serde::{Deserialize, Serialize};

use crate::client::EchoClient;

/// Response envelope for the memory listing; the caller sees the inner list.
#[derive(Debug, Deserialize)]
struct MemoryList {
    memories: Vec<Memory>,
}

/// A stored memory as returned by the listing endpoint.
///
/// Timestamps are UTC; the backend sends them without an offset suffix.
#[derive(Debug, Clone, Deserialize)]
pub struct Memory {
    /// Backend-assigned identifier.
    pub id: String,
    /// The remembered text.
    pub text: String,
    /// Free-form tags attached at save time. Nullable on the backend; null
    /// reads as empty.
    #[serde(default, deserialize_with = "null_to_empty")]
    pub tags: Vec<String>,
    /// Emotion label recorded with the memory.
    pub emotion: Option<String>,
    /// When the memory happened.
    pub timestamp: NaiveDateTime,
    /// When the memory was stored.
    pub created_at: NaiveDateTime,
}

/// Fields for saving a memory.
#[derive(Debug, Clone, Serialize)]
pub struct NewMemory {
    /// The text to remember.
    pub text: String,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// Emotion label. Omit to take the backend default.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emotion: Option<String>,
    /// When the memory happened. Omit to record it as now.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<NaiveDateTime>,
}

impl NewMemory {
    /// A memory with the given text and tags, defaulting everything else.
    #[must_use]
    pub fn tagged(text: impl Into<String>, tags: impl IntoIterator<Item = String>) -> Self {
        Self {
            text: text.into(),
            tags: tags.into_iter().collect(),
            emotion: None,
            timestamp: None,
        }
    }
}

/// Acknowledgement for a saved memory.
#[derive(Debug, Clone, Deserialize)]
pub struct SavedMemory {
    /// Identifier the memory was stored under.
    pub id: String,
    /// Backend status string, `saved` on success.
    pub status: String,
}

/// One hit from the semantic search index.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryMatch {
    /// Vector id; matches the stored memory's id.
    pub id: String,
    /// Similarity score, higher is closer.
    pub score: f32,
    /// Stored metadata, when the index returns it.
    #[serde(default)]
    pub metadata: Option<MatchMetadata>,
}

/// Metadata stored alongside a memory vector.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchMetadata {
    /// The remembered text.
    #[serde(default)]
    pub text: String,
    /// Tags from save time. Nullable on the backend; null reads as empty.
    #[serde(default, deserialize_with = "null_to_empty")]
    pub tags: Vec<String>,
    /// Emotion label from save time.
    pub emotion: Option<String>,
}

/// The backend stores tags in a nullable column and serializes null as-is;
/// read that as an empty list.
fn null_to_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let tags = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(tags.unwrap_or_default())
}

impl EchoClient {
    /// List stored memories, newest first, up to `limit`.
    pub async fn memories(&self, limit: u32) -> Result<Vec<Memory>, ClientError> {
        let list: MemoryList = self
            .get_json_query("/api/memory/all", &[("limit", limit.to_string())])
            .await?;
        Ok(list.memories)
    }

    /// Save a memory and return the stored id.
    pub async fn save_memory(&self, memory: &NewMemory) -> Result<SavedMemory, ClientError> {
        self.post_json("/api/memory/save", memory).await
    }

    /// Search memories by semantic similarity to `query`.
    pub async fn search_memories(
        &self,
        query: &str,
        limit: u32,
    ) -> Result<Vec<MemoryMatch>, ClientError> {
        self.get_json_query(
            "/api/memory/search",
            &[("q", query.to_string()), ("limit", limit.to_string())],
        )
        .await
    }
}
