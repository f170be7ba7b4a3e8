//! Data types for indexed chunks and search results.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Metadata key under which a chunk's source identifier is stored.
pub const SOURCE_ID_KEY: &str = "id";

/// A unit of previously indexed text with its vector embedding.
///
/// Chunks are produced and persisted by external ingestion tooling;
/// this crate only ever reads them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Chunk {
    /// Unique identifier for the chunk within the index.
    pub id: String,
    /// The text content of the chunk.
    pub text: String,
    /// The vector embedding for this chunk's text.
    pub embedding: Vec<f32>,
    /// Key-value metadata attached at ingestion time. The `id` key, when
    /// present, is the chunk's source identifier used for attribution.
    #[serde(default)]
    pub metadata: HashMap<String, String>,
    /// The ID of the document this chunk was split from.
    pub document_id: String,
}

impl Chunk {
    /// The source identifier from this chunk's metadata, if one was recorded.
    pub fn source_id(&self) -> Option<&str> {
        self.metadata.get(SOURCE_ID_KEY).map(String::as_str)
    }
}

/// A retrieved [`Chunk`] paired with a similarity score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// The retrieved chunk.
    pub chunk: Chunk,
    /// The similarity score (higher is more similar).
    pub score: f32,
}
