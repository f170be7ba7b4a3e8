//! Retrieval orchestration: embed the query, search the index.
//!
//! The [`Retriever`] composes an [`EmbeddingProvider`] with a
//! [`StoreOpener`] and runs the embed → search workflow for each query.

use std::path::PathBuf;
use std::sync::Arc;

use tracing::info;

use crate::document::SearchResult;
use crate::embedding::EmbeddingProvider;
use crate::error::Result;
use crate::vectorstore::StoreOpener;

/// Number of nearest neighbors requested for every query.
pub const TOP_K: usize = 5;

/// Runs similarity retrieval against a persisted index.
///
/// For each query the retriever opens the store fresh, embeds the query
/// text, and asks the store for the [`TOP_K`] nearest chunks. Results are
/// returned exactly in the order the store reports them, most-similar
/// first; no reranking or threshold filtering is applied.
///
/// # Example
///
/// ```rust,ignore
/// use askme_rag::{OllamaEmbeddingProvider, Retriever};
///
/// let retriever = Retriever::for_index_dir(
///     Arc::new(OllamaEmbeddingProvider::local()),
///     "./index",
/// );
/// let results = retriever.retrieve("what is ownership?").await?;
/// ```
pub struct Retriever {
    embedding_provider: Arc<dyn EmbeddingProvider>,
    index: Arc<dyn StoreOpener>,
}

impl Retriever {
    /// Create a retriever over an arbitrary store source.
    pub fn new(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        index: Arc<dyn StoreOpener>,
    ) -> Self {
        Self { embedding_provider, index }
    }

    /// Create a retriever over a persisted index directory.
    pub fn for_index_dir(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        dir: impl Into<PathBuf>,
    ) -> Self {
        Self::new(embedding_provider, Arc::new(dir.into()))
    }

    /// Retrieve the [`TOP_K`] chunks nearest to `query`.
    ///
    /// # Errors
    ///
    /// Errors from opening the index, embedding the query, or searching
    /// propagate unchanged; there is no retry or fallback.
    pub async fn retrieve(&self, query: &str) -> Result<Vec<SearchResult>> {
        let store = self.index.open_store()?;
        let embedding = self.embedding_provider.embed(query).await?;
        let results = store.search(&embedding, TOP_K).await?;

        info!(result_count = results.len(), "retrieval completed");

        Ok(results)
    }
}
