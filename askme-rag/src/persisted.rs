//! Persisted vector store backed by a directory on disk.
//!
//! This module provides [`PersistedVectorStore`], which opens a pre-built
//! index directory and serves cosine-similarity searches over its chunks.
//! The on-disk contract is a single `index.json` file inside the directory
//! holding a serialized `Vec<Chunk>`. The store never writes.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::document::{Chunk, SearchResult};
use crate::error::{RagError, Result};
use crate::vectorstore::{StoreOpener, VectorStore};

/// File name of the serialized chunk list inside an index directory.
pub const INDEX_FILE: &str = "index.json";

/// A read-only vector store loaded from a persisted index directory.
///
/// # Example
///
/// ```rust,ignore
/// use askme_rag::{PersistedVectorStore, VectorStore};
///
/// let store = PersistedVectorStore::open("./index")?;
/// let results = store.search(&query_embedding, 5).await?;
/// ```
#[derive(Debug)]
pub struct PersistedVectorStore {
    chunks: Vec<Chunk>,
}

impl PersistedVectorStore {
    /// Open the index stored under `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`RagError::VectorStoreError`] if the directory or its
    /// `index.json` is missing or malformed.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let index_file = dir.as_ref().join(INDEX_FILE);

        let data = std::fs::read(&index_file).map_err(|e| RagError::VectorStoreError {
            backend: "Persisted".to_string(),
            message: format!("failed to read '{}': {e}", index_file.display()),
        })?;

        let chunks: Vec<Chunk> =
            serde_json::from_slice(&data).map_err(|e| RagError::VectorStoreError {
                backend: "Persisted".to_string(),
                message: format!("failed to parse '{}': {e}", index_file.display()),
            })?;

        tracing::debug!(
            path = %dir.as_ref().display(),
            chunk_count = chunks.len(),
            "opened index"
        );

        Ok(Self { chunks })
    }

    /// The number of chunks in the index.
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// Whether the index contains no chunks.
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }
}

/// Compute cosine similarity between two vectors.
///
/// Returns 0.0 if either vector has zero magnitude.
fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    dot / (norm_a * norm_b)
}

/// A `PathBuf` opens the persisted index stored under that directory.
impl StoreOpener for PathBuf {
    fn open_store(&self) -> Result<Box<dyn VectorStore>> {
        Ok(Box::new(PersistedVectorStore::open(self)?))
    }
}

#[async_trait]
impl VectorStore for PersistedVectorStore {
    async fn search(&self, embedding: &[f32], top_k: usize) -> Result<Vec<SearchResult>> {
        let mut scored: Vec<SearchResult> = self
            .chunks
            .iter()
            .map(|chunk| {
                let score = cosine_similarity(&chunk.embedding, embedding);
                SearchResult { chunk: chunk.clone(), score }
            })
            .collect();

        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
        scored.truncate(top_k);
        Ok(scored)
    }
}

#[cfg(test)]
mod tests {
    use super::cosine_similarity;

    #[test]
    fn cosine_of_parallel_vectors_is_one() {
        let sim = cosine_similarity(&[1.0, 2.0, 3.0], &[2.0, 4.0, 6.0]);
        assert!((sim - 1.0).abs() < 1e-6);
    }

    #[test]
    fn cosine_of_orthogonal_vectors_is_zero() {
        let sim = cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]);
        assert!(sim.abs() < 1e-6);
    }

    #[test]
    fn cosine_of_zero_vector_is_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), 0.0);
    }
}
