//! Error types for the `askme-chat` crate.

use thiserror::Error;

/// Errors that can occur while answering a chat turn.
#[derive(Debug, Error)]
pub enum ChatError {
    /// An error propagated from the retrieval layer.
    #[error(transparent)]
    Rag(#[from] askme_rag::RagError),

    /// An error propagated from the model layer.
    #[error(transparent)]
    Model(#[from] askme_model::ModelError),

    /// A configuration validation error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A convenience result type for chat operations.
pub type Result<T> = std::result::Result<T, ChatError>;
