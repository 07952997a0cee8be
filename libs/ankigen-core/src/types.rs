//! Core types for card import, export, and generation.

use serde::{Deserialize, Serialize};

/// One flashcard: a question/answer pair.
///
/// Cards are value-like and immutable once created; their only identity is
/// their position in a sequence, which is preserved from import or
/// generation through to export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub question: String,
    pub answer: String,
}

impl Card {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// Default number of cards requested per generation.
pub const DEFAULT_CARD_COUNT: usize = 10;

/// Configuration for one generation prompt.
///
/// Built once per LLM call and not persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationRequest {
    /// Topic the cards should cover.
    pub topic: String,
    /// How many cards to ask for.
    pub count: usize,
    /// Custom formatting instructions; the default exam-style JSON
    /// instructions are substituted when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format_instructions: Option<String>,
}

impl GenerationRequest {
    /// Create a request for the default number of cards.
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            count: DEFAULT_CARD_COUNT,
            format_instructions: None,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_format_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.format_instructions = Some(instructions.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn request_defaults_to_ten_cards() {
        let request = GenerationRequest::new("Rust ownership");
        assert_eq!(request.count, 10);
        assert_eq!(request.format_instructions, None);
    }

    #[test]
    fn request_builders_override_defaults() {
        let request = GenerationRequest::new("anatomy")
            .with_count(25)
            .with_format_instructions("short answers only");
        assert_eq!(request.count, 25);
        assert_eq!(
            request.format_instructions.as_deref(),
            Some("short answers only")
        );
    }
}
