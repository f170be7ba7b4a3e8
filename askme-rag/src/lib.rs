//! # askme-rag
//!
//! Retrieval layer for the `askme` chat assistant.
//!
//! Given a free-text query, this crate embeds it, searches a persisted
//! vector index for the nearest chunks, and hands them back in ranked
//! order. The index is pre-built by external tooling and treated as
//! strictly read-only; nothing in this crate creates or mutates it.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use askme_rag::{OllamaEmbeddingProvider, PersistedVectorStore, Retriever};
//!
//! let embedder = Arc::new(OllamaEmbeddingProvider::new("http://localhost:11434"));
//! let retriever = Retriever::new(embedder, "./index");
//! let results = retriever.retrieve("what is ownership?").await?;
//! ```

pub mod document;
pub mod embedding;
pub mod error;
pub mod ollama;
pub mod persisted;
pub mod retriever;
pub mod vectorstore;

pub use document::{Chunk, SearchResult};
pub use embedding::EmbeddingProvider;
pub use error::{RagError, Result};
pub use ollama::OllamaEmbeddingProvider;
pub use persisted::PersistedVectorStore;
pub use retriever::{Retriever, TOP_K};
pub use vectorstore::{StoreOpener, VectorStore};
