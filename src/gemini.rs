//! Gemini API client for the generative advisory backend
//!
//! Uses a long-lived reqwest::Client for connection pooling. The API key
//! is read from the environment at call time so a missing credential
//! degrades at the advisor boundary instead of failing at startup.

use crate::advisor::TextGenerator;
use crate::error::AdvisoryError;
use crate::Result;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use tracing::{error, info};

/// Environment variable holding the Gemini credential.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

// Values that count as "not configured".
const PLACEHOLDER_KEYS: &[&str] = &["your_gemini_api_key_here", "YOUR_API_KEY_HERE"];

// Bounded timeout around the generation call. Failures here degrade to a
// fallback message at the advisor boundary.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const SYSTEM_PROMPT: &str = r#"You are a professional financial advisor for Indian personal finance.

Guidelines:
- Provide accurate and educational financial information
- Be structured and concise
- Ground recommendations in the figures supplied by the user
- Emphasize risk awareness and tax efficiency
- Use professional financial language

Format: Provide structured answers suitable for financial decision-making."#;

/// Reusable Gemini client (connection-pooled)
pub struct GeminiClient {
    client: Client,
    base_url: String,
}

impl GeminiClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(8)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent".to_string(),
        }
    }
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String> {
        let api_key = configured_key(env::var(API_KEY_ENV).ok())?;
        let url = format!("{}?key={}", self.base_url, api_key);

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.4,
                top_p: 0.9,
                top_k: 40,
                max_output_tokens: 1024,
            },
            system_instruction: SystemInstruction {
                parts: vec![Part {
                    text: SYSTEM_PROMPT.to_string(),
                }],
            },
        };

        info!("Calling Gemini API");

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Gemini API request failed: {}", e);
                AdvisoryError::GenerationError(format!("Gemini API error: {}", e))
            })?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            error!("Gemini API error response: {}", error_text);
            return Err(AdvisoryError::GenerationError(format!(
                "Gemini API error: {}",
                error_text
            )));
        }

        let gemini_response: GeminiResponse = response.json().await.map_err(|e| {
            error!("Failed to parse Gemini response: {}", e);
            AdvisoryError::GenerationError(format!("Gemini parse error: {}", e))
        })?;

        let answer = gemini_response
            .candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .map(|part| part.text.clone())
            .ok_or_else(|| {
                AdvisoryError::GenerationError("Empty response from Gemini".to_string())
            })?;

        info!("Gemini response received");

        Ok(answer)
    }
}

/// Reject absent, empty, and placeholder credentials.
fn configured_key(raw: Option<String>) -> Result<String> {
    match raw {
        Some(key) if !key.is_empty() && !PLACEHOLDER_KEYS.contains(&key.as_str()) => Ok(key),
        _ => Err(AdvisoryError::MissingCredential),
    }
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<Content>,
    generation_config: GenerationConfig,
    system_instruction: SystemInstruction,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    top_p: f32,
    top_k: i32,
    max_output_tokens: i32,
}

#[derive(Debug, Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization() {
        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: "Why is the new regime better for me?".to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: 0.4,
                top_p: 0.9,
                top_k: 40,
                max_output_tokens: 1024,
            },
            system_instruction: SystemInstruction {
                parts: vec![Part {
                    text: "You are a financial advisor".to_string(),
                }],
            },
        };

        let json = serde_json::to_string(&request);
        assert!(json.is_ok());
        assert!(json.unwrap().contains("Why is the new regime better for me?"));
    }

    #[test]
    fn placeholder_credentials_are_rejected() {
        assert!(matches!(
            configured_key(None),
            Err(AdvisoryError::MissingCredential)
        ));
        assert!(matches!(
            configured_key(Some(String::new())),
            Err(AdvisoryError::MissingCredential)
        ));
        assert!(matches!(
            configured_key(Some("your_gemini_api_key_here".to_string())),
            Err(AdvisoryError::MissingCredential)
        ));
        assert_eq!(
            configured_key(Some("real-key".to_string())).unwrap(),
            "real-key"
        );
    }
}
