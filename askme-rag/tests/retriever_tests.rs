//! Tests for the retriever against fake stores and embedders.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use askme_rag::document::{Chunk, SearchResult};
use askme_rag::embedding::EmbeddingProvider;
use askme_rag::error::{RagError, Result};
use askme_rag::retriever::{Retriever, TOP_K};
use askme_rag::vectorstore::{StoreOpener, VectorStore};
use async_trait::async_trait;

struct FixedEmbedder;

#[async_trait]
impl EmbeddingProvider for FixedEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
        Ok(vec![1.0, 0.0, 0.0])
    }

    fn dimensions(&self) -> usize {
        3
    }
}

struct FailingEmbedder;

#[async_trait]
impl EmbeddingProvider for FailingEmbedder {
    async fn embed(&self, _text: &str) -> Result<Vec<f32>> {
        Err(RagError::EmbeddingError {
            provider: "Fake".into(),
            message: "embedder down".into(),
        })
    }

    fn dimensions(&self) -> usize {
        3
    }
}

/// Records the requested top_k and returns a canned result list as-is.
struct RecordingStore {
    results: Vec<SearchResult>,
    requested_top_k: Arc<AtomicUsize>,
}

#[async_trait]
impl VectorStore for RecordingStore {
    async fn search(&self, _embedding: &[f32], top_k: usize) -> Result<Vec<SearchResult>> {
        self.requested_top_k.store(top_k, Ordering::SeqCst);
        Ok(self.results.clone())
    }
}

struct RecordingOpener {
    results: Vec<SearchResult>,
    requested_top_k: Arc<AtomicUsize>,
    open_count: Arc<AtomicUsize>,
}

impl StoreOpener for RecordingOpener {
    fn open_store(&self) -> Result<Box<dyn VectorStore>> {
        self.open_count.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(RecordingStore {
            results: self.results.clone(),
            requested_top_k: self.requested_top_k.clone(),
        }))
    }
}

struct FailingOpener;

impl StoreOpener for FailingOpener {
    fn open_store(&self) -> Result<Box<dyn VectorStore>> {
        Err(RagError::VectorStoreError {
            backend: "Fake".into(),
            message: "index missing".into(),
        })
    }
}

fn result(id: &str, score: f32) -> SearchResult {
    SearchResult {
        chunk: Chunk {
            id: id.to_string(),
            text: format!("text {id}"),
            embedding: vec![0.0; 3],
            metadata: HashMap::new(),
            document_id: "doc".to_string(),
        },
        score,
    }
}

#[tokio::test]
async fn requests_exactly_five_neighbors() {
    let requested = Arc::new(AtomicUsize::new(0));
    let opener = RecordingOpener {
        results: Vec::new(),
        requested_top_k: requested.clone(),
        open_count: Arc::new(AtomicUsize::new(0)),
    };
    let retriever = Retriever::new(Arc::new(FixedEmbedder), Arc::new(opener));

    retriever.retrieve("anything").await.unwrap();

    assert_eq!(requested.load(Ordering::SeqCst), TOP_K);
    assert_eq!(TOP_K, 5);
}

#[tokio::test]
async fn preserves_store_order_unmodified() {
    // Deliberately not sorted by score: the retriever must not re-sort.
    let results = vec![result("b", 0.2), result("a", 0.9), result("c", 0.5)];
    let opener = RecordingOpener {
        results,
        requested_top_k: Arc::new(AtomicUsize::new(0)),
        open_count: Arc::new(AtomicUsize::new(0)),
    };
    let retriever = Retriever::new(Arc::new(FixedEmbedder), Arc::new(opener));

    let retrieved = retriever.retrieve("anything").await.unwrap();
    let ids: Vec<&str> = retrieved.iter().map(|r| r.chunk.id.as_str()).collect();
    assert_eq!(ids, ["b", "a", "c"]);
}

#[tokio::test]
async fn opens_the_store_on_every_query() {
    let open_count = Arc::new(AtomicUsize::new(0));
    let opener = RecordingOpener {
        results: Vec::new(),
        requested_top_k: Arc::new(AtomicUsize::new(0)),
        open_count: open_count.clone(),
    };
    let retriever = Retriever::new(Arc::new(FixedEmbedder), Arc::new(opener));

    retriever.retrieve("first").await.unwrap();
    retriever.retrieve("second").await.unwrap();

    assert_eq!(open_count.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn store_open_error_propagates() {
    let retriever = Retriever::new(Arc::new(FixedEmbedder), Arc::new(FailingOpener));

    let err = retriever.retrieve("anything").await.unwrap_err();
    assert!(matches!(err, RagError::VectorStoreError { .. }));
}

#[tokio::test]
async fn embedding_error_propagates() {
    let opener = RecordingOpener {
        results: Vec::new(),
        requested_top_k: Arc::new(AtomicUsize::new(0)),
        open_count: Arc::new(AtomicUsize::new(0)),
    };
    let retriever = Retriever::new(Arc::new(FailingEmbedder), Arc::new(opener));

    let err = retriever.retrieve("anything").await.unwrap_err();
    assert!(matches!(err, RagError::EmbeddingError { .. }));
}
