//! Tramita LLM Provider Layer
//!
//! Implementations of the `LlmProvider` trait from `tramita-domain`.
//!
//! # Providers
//!
//! - `MockProvider`: deterministic mock for testing
//! - `GeminiProvider`: Google Generative Language API, used for PDF text
//!   extraction and subject classification
//!
//! # Examples
//!
//! ```
//! use tramita_llm::MockProvider;
//! use tramita_domain::traits::LlmProvider;
//!
//! # tokio_test::block_on(async {
//! let provider = MockProvider::new("Texto extraído");
//! let result = provider.generate("qualquer prompt").await.unwrap();
//! assert_eq!(result, "Texto extraído");
//! # });
//! ```

#![warn(missing_docs)]

pub mod gemini;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tramita_domain::traits::LlmProvider;

pub use gemini::GeminiProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls. A
/// document attached to a call is ignored; only the prompt selects the
/// response.
///
/// # Examples
///
/// ```
/// use tramita_llm::MockProvider;
/// use tramita_domain::traits::LlmProvider;
///
/// # tokio_test::block_on(async {
/// let mut provider = MockProvider::default();
/// provider.add_response("prompt1", "response1");
/// assert_eq!(provider.generate("prompt1").await.unwrap(), "response1");
/// # });
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<usize>>,
    fail_next: Arc<Mutex<bool>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
            fail_next: Arc::new(Mutex::new(false)),
        }
    }

    /// Add a specific response for a given prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), response.into());
    }

    /// Make the next call return an error
    pub fn fail_next(&mut self) {
        *self.fail_next.lock().unwrap() = true;
    }

    /// Get the number of times a generate method was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }

    fn respond(&self, prompt: &str) -> Result<String, LlmError> {
        *self.call_count.lock().unwrap() += 1;

        let mut fail = self.fail_next.lock().unwrap();
        if *fail {
            *fail = false;
            return Err(LlmError::Other("Mock error".to_string()));
        }

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(prompt) {
            return Ok(response.clone());
        }
        Ok(self.default_response.clone())
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProvider for MockProvider {
    type Error = LlmError;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        self.respond(prompt)
    }

    async fn generate_with_document(
        &self,
        prompt: &str,
        _document: &[u8],
        _mime_type: &str,
    ) -> Result<String, Self::Error> {
        self.respond(prompt)
    }
}
