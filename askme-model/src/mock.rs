//! Mock LLM for testing.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{ModelError, Result};
use crate::Llm;

/// A test double that returns a canned response and records prompts.
///
/// # Example
///
/// ```rust,ignore
/// use askme_model::{Llm, MockLlm};
///
/// let model = MockLlm::new("canned answer");
/// assert_eq!(model.generate("hi").await?, "canned answer");
/// assert_eq!(model.prompts(), vec!["hi"]);
/// ```
pub struct MockLlm {
    response: String,
    fail_with: Option<String>,
    prompts: Mutex<Vec<String>>,
}

impl MockLlm {
    /// Create a mock that answers every prompt with `response`.
    pub fn new(response: impl Into<String>) -> Self {
        Self { response: response.into(), fail_with: None, prompts: Mutex::new(Vec::new()) }
    }

    /// Create a mock whose every call fails with the given message.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            response: String::new(),
            fail_with: Some(message.into()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// The prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().expect("mock lock poisoned").clone()
    }
}

#[async_trait]
impl Llm for MockLlm {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().expect("mock lock poisoned").push(prompt.to_string());
        match &self.fail_with {
            Some(message) => Err(ModelError::Model {
                provider: "Mock".into(),
                message: message.clone(),
            }),
            None => Ok(self.response.clone()),
        }
    }
}
