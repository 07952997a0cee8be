//! Response interpreter: recovers cards from raw LLM output.
//!
//! Models rarely return clean JSON even when asked to, so extraction runs
//! in two stages: a structured pass that brackets and parses a JSON
//! candidate, and a heuristic line scan that recognizes `Q:`/`A:`-style
//! markers when the structured pass yields nothing. Interpretation never
//! fails; the worst case is an empty sequence.

use serde_json::Value;

use crate::types::Card;

/// Extract cards from a raw model response, best effort.
///
/// The structured stage wins when it produces any usable result (including
/// an empty array); otherwise the heuristic stage runs over the full text.
pub fn extract_cards(text: &str) -> Vec<Card> {
    if let Some(cards) = parse_structured(text) {
        return cards;
    }
    extract_from_lines(text)
}

// === Stage A: structured (JSON) extraction ===

/// Bracket a JSON candidate: the span from the first `[` to the last `]`,
/// or failing that from the first `{` to the last `}`.
fn structured_candidate(text: &str) -> Option<&str> {
    if let (Some(start), Some(end)) = (text.find('['), text.rfind(']')) {
        if end > start {
            return Some(&text[start..=end]);
        }
    }
    if let (Some(start), Some(end)) = (text.find('{'), text.rfind('}')) {
        if end > start {
            return Some(&text[start..=end]);
        }
    }
    None
}

fn parse_structured(text: &str) -> Option<Vec<Card>> {
    let candidate = structured_candidate(text)?;
    match serde_json::from_str::<Value>(candidate).ok()? {
        value @ Value::Object(_) => Some(vec![card_from_value(&value)]),
        Value::Array(items) => Some(items.iter().map(card_from_value).collect()),
        _ => None,
    }
}

/// Build a card from a JSON value; missing or non-string fields default to
/// an empty string rather than an error.
fn card_from_value(value: &Value) -> Card {
    let field = |name: &str| {
        value
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string()
    };
    Card {
        question: field("question"),
        answer: field("answer"),
    }
}

// === Stage B: heuristic line-pattern extraction ===

/// A marker prefix and its stripping rule. The tables below are the single
/// source of truth for what counts as a question or answer line.
#[derive(Debug, Clone, Copy)]
enum MarkerPattern {
    /// A literal prefix, e.g. `Q:`.
    Literal(&'static str),
    /// Keyword, optional whitespace, digits, then a colon, e.g. `Card 3:`.
    Numbered(&'static str),
    /// A leading integer followed immediately by `)` or `.`.
    LeadingInteger,
}

const QUESTION_PATTERNS: &[MarkerPattern] = &[
    MarkerPattern::Literal("Q:"),
    MarkerPattern::Literal("Question:"),
    MarkerPattern::Literal("Q."),
    MarkerPattern::Numbered("Card"),
    MarkerPattern::Numbered("Q"),
    MarkerPattern::LeadingInteger,
];

const ANSWER_PATTERNS: &[MarkerPattern] = &[
    MarkerPattern::Literal("A:"),
    MarkerPattern::Literal("Answer:"),
    MarkerPattern::Literal("A."),
];

impl MarkerPattern {
    /// Strip this pattern from the start of a trimmed line, returning the
    /// remainder on a match.
    fn strip<'a>(&self, line: &'a str) -> Option<&'a str> {
        match self {
            Self::Literal(prefix) => line.strip_prefix(prefix),
            Self::Numbered(keyword) => {
                let rest = line.strip_prefix(keyword)?.trim_start();
                let digits = rest.chars().take_while(char::is_ascii_digit).count();
                if digits == 0 {
                    return None;
                }
                rest[digits..].strip_prefix(':')
            }
            Self::LeadingInteger => {
                let digits = line.chars().take_while(char::is_ascii_digit).count();
                if digits == 0 {
                    return None;
                }
                let rest = &line[digits..];
                rest.strip_prefix(')').or_else(|| rest.strip_prefix('.'))
            }
        }
    }
}

fn match_any<'a>(patterns: &[MarkerPattern], line: &'a str) -> Option<&'a str> {
    patterns.iter().find_map(|pattern| pattern.strip(line))
}

fn extract_from_lines(text: &str) -> Vec<Card> {
    let mut cards = Vec::new();
    let mut question: Option<String> = None;
    let mut fragments: Vec<String> = Vec::new();

    for raw_line in text.lines() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = match_any(QUESTION_PATTERNS, line) {
            finalize(&mut cards, &mut question, &mut fragments);
            let rest = rest.trim();
            question = (!rest.is_empty()).then(|| rest.to_string());
            continue;
        }

        if let Some(rest) = match_any(ANSWER_PATTERNS, line) {
            if question.is_some() {
                fragments.push(rest.trim().to_string());
            }
            continue;
        }

        // Continuation of the current answer, whether or not an answer
        // marker has been seen yet.
        if question.is_some() {
            fragments.push(line.to_string());
        }
    }

    finalize(&mut cards, &mut question, &mut fragments);
    cards
}

/// Emit the pending question as a card if it accumulated at least one
/// answer fragment, then reset both slots.
fn finalize(cards: &mut Vec<Card>, question: &mut Option<String>, fragments: &mut Vec<String>) {
    if let Some(q) = question.take() {
        if !fragments.is_empty() {
            cards.push(Card::new(q, fragments.join(" ")));
        }
    }
    fragments.clear();
}
