//! Prompt template for card generation.

use crate::types::GenerationRequest;

/// Format instructions used when the request does not supply its own.
pub const DEFAULT_FORMAT_INSTRUCTIONS: &str = "Generate concise, exam-style flashcards with clear questions and answers. \
     Make sure the answers are detailed enough to be educational but concise. \
     Format your response as a JSON array of objects, where each object has \
     a 'question' and 'answer' field.";

/// Compose the single prompt for one generation request.
pub fn build_prompt(request: &GenerationRequest) -> String {
    let instructions = request
        .format_instructions
        .as_deref()
        .unwrap_or(DEFAULT_FORMAT_INSTRUCTIONS);

    format!(
        "Topic: {}\n\n\
         Please generate {} high-quality flashcards for this topic.\n\n\
         {}",
        request.topic, request.count, instructions
    )
}
