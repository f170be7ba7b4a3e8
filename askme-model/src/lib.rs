//! # askme-model
//!
//! Model layer for the `askme` chat assistant.
//!
//! Provides the [`Llm`] trait — a minimal prompt-in, completion-out seam —
//! plus two implementations:
//!
//! - [`OllamaClient`] — a locally hosted Ollama model over HTTP
//! - [`MockLlm`] — a canned-response model for tests
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use askme_model::{Llm, OllamaClient};
//!
//! let model = OllamaClient::local("llama3.2");
//! let answer = model.generate("Why is the sky blue?").await?;
//! ```

pub mod error;
pub mod mock;
pub mod ollama;

use async_trait::async_trait;

pub use error::{ModelError, Result};
pub use mock::MockLlm;
pub use ollama::OllamaClient;

/// A generative language model.
///
/// One prompt in, one completion out. Implementations forward the prompt
/// unmodified and return the model's text verbatim; any streaming the
/// backend supports is consumed to completion internally.
#[async_trait]
pub trait Llm: Send + Sync {
    /// The model's identifying name (e.g. `llama3.2`).
    fn name(&self) -> &str;

    /// Generate a completion for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<String>;
}
