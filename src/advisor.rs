//! Generative advisory boundary
//!
//! Wraps the text-generation backend behind a total function: the
//! orchestrator must never crash because the backend is unreachable, so
//! every failure converts to one of two fixed fallback strings.

use crate::console::Console;
use crate::error::AdvisoryError;
use crate::Result;
use async_trait::async_trait;
use tracing::{info, warn};

/// Seam over the external generation capability.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String>;
}

/// Fallback when no usable credential is configured.
pub const MISSING_CREDENTIAL_FALLBACK: &str =
    "I cannot connect to the AI service without a valid API key.";

/// Fallback when the backend call fails for any other reason.
pub const KNOWLEDGE_BASE_FALLBACK: &str =
    "I'm sorry, I'm having trouble connecting to my knowledge base right now.";

const THINKING_NOTICE: &str = "[Thinking... Contacting Generative AI...]";

pub struct GenerativeAdvisor {
    generator: Box<dyn TextGenerator>,
}

impl GenerativeAdvisor {
    pub fn new(generator: Box<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Generate advisory text for `prompt`, degrading to a fixed fallback
    /// string on any failure.
    pub async fn advise<C: Console>(&self, console: &mut C, prompt: &str) -> String {
        console.notice(THINKING_NOTICE);

        match self.generator.generate(prompt).await {
            Ok(text) => {
                info!("Generation backend answered");
                text
            }
            Err(AdvisoryError::MissingCredential) => {
                warn!("Generation credential missing; serving fallback message");
                MISSING_CREDENTIAL_FALLBACK.to_string()
            }
            Err(error) => {
                warn!("Generation backend failed: {}; serving fallback message", error);
                KNOWLEDGE_BASE_FALLBACK.to_string()
            }
        }
    }
}

/// Fixed-response generator for development and testing.
///
/// Keeps the pipeline functional without the LLM dependency.
pub struct StaticGenerator(pub &'static str);

#[async_trait]
impl TextGenerator for StaticGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        Ok(self.0.to_string())
    }
}
