//! Google Gemini API Client.
//!
//! Single-shot `generateContent` calls: no streaming, no retries.

use std::env;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::DEFAULT_GEMINI_MODEL;
use crate::{Error, Result};

const GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Environment variable holding the API credential.
pub const API_KEY_ENV: &str = "GOOGLE_API_KEY";

/// Google Gemini client.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: Option<f32>,
    max_output_tokens: Option<u32>,
}

impl GeminiClient {
    /// Create a client from the GOOGLE_API_KEY environment variable.
    pub fn from_env() -> Result<Self> {
        let api_key =
            env::var(API_KEY_ENV).map_err(|_| Error::MissingCredential(API_KEY_ENV.to_string()))?;
        Self::new(api_key, DEFAULT_GEMINI_MODEL)
    }

    /// Create a client with an API key and model.
    pub fn new<S: Into<String>>(api_key: S, model: &str) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::InvalidArgument(format!("{} is empty", API_KEY_ENV)));
        }

        let http = Client::builder()
            .user_agent(concat!("simula/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::GeminiError(format!("HTTP client error: {}", e)))?;

        Ok(Self {
            http,
            api_key,
            base_url: GEMINI_API_URL.to_string(),
            model: model.to_string(),
            temperature: None,
            max_output_tokens: None,
        })
    }

    /// Set the model.
    pub fn with_model(mut self, model: &str) -> Self {
        self.model = model.to_string();
        self
    }

    /// Point the client at another endpoint (proxies, tests).
    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set sampling temperature and output token cap; `None` leaves the API default.
    pub fn with_generation(
        mut self,
        temperature: Option<f32>,
        max_output_tokens: Option<u32>,
    ) -> Self {
        self.temperature = temperature;
        self.max_output_tokens = max_output_tokens;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one prompt and return the text parts of the first candidate, joined.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let payload = GeminiRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: self.generation_config(),
        };

        let url = format!("{}/models/{}:generateContent", self.base_url, self.model);
        debug!("Gemini request: model={} prompt_len={}", self.model, prompt.len());

        let response = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&payload)
            .send()
            .await
            .map_err(|e| Error::GeminiError(format!("request failed: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::GeminiError(format!("failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(Error::GeminiError(format!("{}: {}", status, text)));
        }

        let gemini_response: GeminiResponse = serde_json::from_str(&text)
            .map_err(|e| Error::GeminiError(format!("invalid response: {} - {}", e, text)))?;

        let parts = gemini_response
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts)
            .unwrap_or_default();

        if parts.is_empty() {
            return Err(Error::GeminiError("empty response".to_string()));
        }

        Ok(parts.into_iter().map(|p| p.text).collect())
    }

    fn generation_config(&self) -> Option<GenerationConfig> {
        if self.temperature.is_none() && self.max_output_tokens.is_none() {
            return None;
        }
        Some(GenerationConfig {
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
        })
    }
}

// === Request structures ===

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "generationConfig")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    role: String,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none", rename = "maxOutputTokens")]
    max_output_tokens: Option<u32>,
}

// === Response structures ===

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}
