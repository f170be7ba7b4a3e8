//! Chat engine: retrieve → assemble prompt → generate.
//!
//! The [`ChatEngine`] runs one turn at a time: it retrieves the nearest
//! chunks for the user's input, fills the prompt template, and forwards
//! the prompt to the configured model. Construct one via
//! [`ChatEngine::builder()`].

use std::sync::Arc;

use askme_model::Llm;
use askme_rag::Retriever;
use tracing::info;

use crate::error::{ChatError, Result};
use crate::prompt;
use crate::session::Session;

/// The answer to one turn, with the sources it was grounded on.
#[derive(Debug, Clone, PartialEq)]
pub struct ChatResponse {
    /// The model's completion, verbatim.
    pub text: String,
    /// Source identifier of each retrieved chunk, in retrieval order.
    /// `None` where a chunk carries no source id.
    pub sources: Vec<Option<String>>,
}

/// Orchestrates retrieval and generation for chat turns.
pub struct ChatEngine {
    retriever: Retriever,
    llm: Arc<dyn Llm>,
}

impl std::fmt::Debug for ChatEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatEngine").finish_non_exhaustive()
    }
}

impl ChatEngine {
    /// Create a new [`ChatEngineBuilder`].
    pub fn builder() -> ChatEngineBuilder {
        ChatEngineBuilder::default()
    }

    /// Answer a single query: retrieve, assemble the prompt, generate.
    ///
    /// # Errors
    ///
    /// Errors from retrieval or generation propagate unchanged; there is
    /// no retry, fallback, or partial result.
    pub async fn answer(&self, query: &str) -> Result<ChatResponse> {
        let results = self.retriever.retrieve(query).await?;

        let context = prompt::build_context(results.iter().map(|r| r.chunk.text.as_str()));
        let filled = prompt::build_prompt(&context, query);

        let text = self.llm.generate(&filled).await?;

        let sources: Vec<Option<String>> =
            results.iter().map(|r| r.chunk.source_id().map(String::from)).collect();

        info!(
            model = self.llm.name(),
            chunk_count = results.len(),
            answer_len = text.len(),
            "turn answered"
        );

        Ok(ChatResponse { text, sources })
    }

    /// Run one turn against a session: append the user entry, answer, and
    /// append the assistant entry.
    ///
    /// On error the user entry stays in the session with no corresponding
    /// assistant entry, and the error propagates to the caller.
    pub async fn respond(&self, session: &mut Session, input: &str) -> Result<ChatResponse> {
        session.push_user(input);
        let response = self.answer(input).await?;
        session.push_assistant(response.text.clone());
        Ok(response)
    }
}

/// Builder for constructing a [`ChatEngine`].
#[derive(Default)]
pub struct ChatEngineBuilder {
    retriever: Option<Retriever>,
    llm: Option<Arc<dyn Llm>>,
}

impl ChatEngineBuilder {
    /// Set the retriever.
    pub fn retriever(mut self, retriever: Retriever) -> Self {
        self.retriever = Some(retriever);
        self
    }

    /// Set the model.
    pub fn llm(mut self, llm: Arc<dyn Llm>) -> Self {
        self.llm = Some(llm);
        self
    }

    /// Build the [`ChatEngine`], validating that all fields are set.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::Config`] if any required field is missing.
    pub fn build(self) -> Result<ChatEngine> {
        let retriever = self
            .retriever
            .ok_or_else(|| ChatError::Config("retriever is required".to_string()))?;
        let llm = self.llm.ok_or_else(|| ChatError::Config("llm is required".to_string()))?;

        Ok(ChatEngine { retriever, llm })
    }
}
