//! Read-only vector store trait for similarity search.

use async_trait::async_trait;

use crate::document::SearchResult;
use crate::error::Result;

/// A read-only store of embedded chunks supporting similarity search.
///
/// The index behind an implementation is built and maintained by external
/// tooling; this trait exposes only the lookup side.
#[async_trait]
pub trait VectorStore: Send + Sync {
    /// Search for the `top_k` most similar chunks to the given embedding.
    ///
    /// Returns results ordered by descending similarity score.
    async fn search(&self, embedding: &[f32], top_k: usize) -> Result<Vec<SearchResult>>;
}

/// A handle that can open a [`VectorStore`] for querying.
///
/// The retriever opens the store fresh for every query rather than holding
/// one across turns; the underlying index is read-only and re-openable at
/// any time.
pub trait StoreOpener: Send + Sync {
    /// Open the store this handle points at.
    fn open_store(&self) -> Result<Box<dyn VectorStore>>;
}
