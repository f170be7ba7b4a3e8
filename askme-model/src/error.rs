//! Error types for the `askme-model` crate.

use thiserror::Error;

/// Errors that can occur when calling a model backend.
#[derive(Debug, Error)]
pub enum ModelError {
    /// An error occurred in the model backend.
    #[error("Model error ({provider}): {message}")]
    Model {
        /// The model provider that produced the error.
        provider: String,
        /// A description of the failure.
        message: String,
    },
}

/// A convenience result type for model operations.
pub type Result<T> = std::result::Result<T, ModelError>;
