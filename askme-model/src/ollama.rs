//! Ollama client for locally hosted model inference.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::{ModelError, Result};
use crate::Llm;

/// The default base URL of a local Ollama server.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// An [`Llm`] backed by a local Ollama server.
///
/// Uses `reqwest` to call the `/api/generate` endpoint with streaming
/// disabled, so each call returns the full completion in one response.
///
/// # Example
///
/// ```rust,ignore
/// use askme_model::{Llm, OllamaClient};
///
/// let model = OllamaClient::local("llama3.2");
/// let answer = model.generate("Why is the sky blue?").await?;
/// ```
pub struct OllamaClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
}

impl OllamaClient {
    /// Create a client for the given Ollama base URL and model name.
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self { client: reqwest::Client::new(), base_url: base_url.into(), model: model.into() }
    }

    /// Create a client for the default local Ollama server.
    pub fn local(model: impl Into<String>) -> Self {
        Self::new(DEFAULT_OLLAMA_URL, model)
    }
}

// ── Ollama API request/response types ──────────────────────────────

#[derive(Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Deserialize)]
struct GenerateResponse {
    response: String,
}

// ── Llm implementation ─────────────────────────────────────────────

#[async_trait]
impl Llm for OllamaClient {
    fn name(&self) -> &str {
        &self.model
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        debug!(provider = "Ollama", model = %self.model, prompt_len = prompt.len(), "generating");

        let request_body = GenerateRequest { model: &self.model, prompt, stream: false };

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&request_body)
            .send()
            .await
            .map_err(|e| {
                error!(provider = "Ollama", error = %e, "request failed");
                ModelError::Model {
                    provider: "Ollama".into(),
                    message: format!("request failed: {e}"),
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();

            error!(provider = "Ollama", %status, "API error");
            return Err(ModelError::Model {
                provider: "Ollama".into(),
                message: format!("API returned {status}: {body}"),
            });
        }

        let generate_response: GenerateResponse = response.json().await.map_err(|e| {
            error!(provider = "Ollama", error = %e, "failed to parse response");
            ModelError::Model {
                provider: "Ollama".into(),
                message: format!("failed to parse response: {e}"),
            }
        })?;

        Ok(generate_response.response)
    }
}
