//! Gemini Provider Implementation
//!
//! Integration with the Google Generative Language API. Documents are
//! attached inline as base64 parts, which is how PDF text extraction works
//! without a separate upload step.
//!
//! # Features
//!
//! - Async HTTP communication with the generateContent endpoint
//! - Configurable endpoint and model
//! - Retry logic with exponential backoff
//! - Timeout handling

use crate::LlmError;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tramita_domain::traits::LlmProvider;

/// Default Generative Language API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Default model for extraction and classification
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Default timeout for LLM requests (120 seconds; PDF extraction is slow)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Default number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Gemini API provider
pub struct GeminiProvider {
    endpoint: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
    max_retries: u32,
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,

    #[serde(rename = "inline_data", skip_serializing_if = "Option::is_none")]
    inline_data: Option<InlineData>,
}

#[derive(Serialize)]
struct InlineData {
    mime_type: String,
    data: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider
    ///
    /// # Parameters
    ///
    /// - `api_key`: Generative Language API key
    /// - `model`: model to use (e.g. "gemini-1.5-flash")
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("reqwest client with static configuration");

        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            model: model.into(),
            api_key: api_key.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Create a provider with the default model
    pub fn default_model(api_key: impl Into<String>) -> Self {
        Self::new(api_key, DEFAULT_MODEL)
    }

    /// Override the API endpoint (tests, proxies)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the maximum number of retry attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    async fn generate_content(&self, parts: Vec<Part>) -> Result<String, LlmError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        );
        let request_body = GenerateContentRequest {
            contents: vec![Content { parts }],
        };

        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self.client.post(&url).json(&request_body).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        let parsed: GenerateContentResponse =
                            response.json().await.map_err(|e| {
                                LlmError::InvalidResponse(format!(
                                    "Failed to parse response: {}",
                                    e
                                ))
                            })?;
                        return Self::first_candidate_text(parsed);
                    } else if status == reqwest::StatusCode::NOT_FOUND {
                        return Err(LlmError::ModelNotAvailable(self.model.clone()));
                    } else if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        last_error = Some(LlmError::RateLimitExceeded);
                    } else {
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        last_error = Some(LlmError::Communication(format!(
                            "HTTP {}: {}",
                            status, error_text
                        )));
                    }
                }
                Err(e) => {
                    last_error = Some(LlmError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, etc.
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| LlmError::Communication("Max retries exceeded".to_string())))
    }

    fn first_candidate_text(response: GenerateContentResponse) -> Result<String, LlmError> {
        let candidate = response
            .candidates
            .into_iter()
            .next()
            .ok_or_else(|| LlmError::InvalidResponse("No candidates returned".to_string()))?;
        let text: String = candidate
            .content
            .parts
            .into_iter()
            .map(|p| p.text)
            .collect();
        if text.is_empty() {
            return Err(LlmError::InvalidResponse(
                "Candidate contained no text".to_string(),
            ));
        }
        Ok(text)
    }
}

impl LlmProvider for GeminiProvider {
    type Error = LlmError;

    async fn generate(&self, prompt: &str) -> Result<String, Self::Error> {
        self.generate_content(vec![Part {
            text: Some(prompt.to_string()),
            inline_data: None,
        }])
        .await
    }

    async fn generate_with_document(
        &self,
        prompt: &str,
        document: &[u8],
        mime_type: &str,
    ) -> Result<String, Self::Error> {
        self.generate_content(vec![
            Part {
                text: Some(prompt.to_string()),
                inline_data: None,
            },
            Part {
                text: None,
                inline_data: Some(InlineData {
                    mime_type: mime_type.to_string(),
                    data: BASE64.encode(document),
                }),
            },
        ])
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gemini_provider_creation() {
        let provider = GeminiProvider::new("key", "gemini-1.5-flash");
        assert_eq!(provider.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(provider.model, "gemini-1.5-flash");
        assert_eq!(provider.max_retries, DEFAULT_MAX_RETRIES);
    }

    #[test]
    fn test_gemini_provider_default_model() {
        let provider = GeminiProvider::default_model("key");
        assert_eq!(provider.model, DEFAULT_MODEL);
    }

    #[test]
    fn test_request_serialization_with_inline_document() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part {
                        text: Some("extract".to_string()),
                        inline_data: None,
                    },
                    Part {
                        text: None,
                        inline_data: Some(InlineData {
                            mime_type: "application/pdf".to_string(),
                            data: BASE64.encode(b"%PDF-1.4"),
                        }),
                    },
                ],
            }],
        };
        let json = serde_json::to_value(&request).unwrap();
        let parts = &json["contents"][0]["parts"];
        assert_eq!(parts[0]["text"], "extract");
        assert!(parts[0].get("inline_data").is_none());
        assert_eq!(parts[1]["inline_data"]["mime_type"], "application/pdf");
    }

    #[test]
    fn test_response_text_concatenation() {
        let response: GenerateContentResponse = serde_json::from_str(
            r##"{"candidates": [{"content": {"parts": [{"text": "# Doc"}, {"text": "\nArt. 1"}]}}]}"##,
        )
        .unwrap();
        let text = GeminiProvider::first_candidate_text(response).unwrap();
        assert_eq!(text, "# Doc\nArt. 1");
    }

    #[test]
    fn test_empty_candidates_is_invalid_response() {
        let response: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(matches!(
            GeminiProvider::first_candidate_text(response),
            Err(LlmError::InvalidResponse(_))
        ));
    }

    #[tokio::test]
    async fn test_gemini_error_handling() {
        // Unroutable endpoint triggers a communication error
        let provider = GeminiProvider::new("key", "gemini-1.5-flash")
            .with_endpoint("http://localhost:1")
            .with_max_retries(1);

        let result = provider.generate("test").await;
        assert!(matches!(result, Err(LlmError::Communication(_))));
    }
}
