//! Generation orchestrator: prompt building, one LLM call, interpretation.

use tracing::{info, warn};

use crate::error::LlmError;
use crate::interpret::extract_cards;
use crate::prompt::build_prompt;
use crate::types::{Card, GenerationRequest};

/// A transport capable of one operation: prompt in, raw response text out.
///
/// Both the SDK-style and raw-HTTP transports satisfy this, so the
/// interpreter downstream never cares which one produced the text.
#[allow(async_fn_in_trait)]
pub trait LlmClient {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError>;
}

/// Orchestrates card generation over any [`LlmClient`].
pub struct Generator<C> {
    client: C,
}

impl<C: LlmClient> Generator<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    /// Generate cards for one request.
    ///
    /// A single synchronous call, no retry. Transport failures are
    /// non-fatal: they are logged and degrade to an empty sequence, leaving
    /// the caller to decide how to react.
    pub async fn generate(&self, request: &GenerationRequest) -> Vec<Card> {
        let prompt = build_prompt(request);

        let response = match self.client.generate(&prompt).await {
            Ok(text) => text,
            Err(e) => {
                warn!(topic = %request.topic, error = %e, "generation failed");
                return Vec::new();
            }
        };

        let cards = extract_cards(&response);
        info!(
            topic = %request.topic,
            requested = request.count,
            extracted = cards.len(),
            "generation complete"
        );
        cards
    }
}
