//! Import parsers for card files.
//!
//! # Formats
//! Tab-separated, one card per line:
//! ```text
//! What is Rust?\tA systems programming language.
//! ```
//! Delimited (CSV) with a configurable single-byte delimiter and standard
//! quoted-field semantics; the first two fields of each row become the
//! question and answer.

use tracing::warn;

use crate::types::Card;

/// Parse tab-separated content into cards.
///
/// A line is included only if it contains exactly one tab after trimming;
/// lines without a tab are silently skipped, and lines with more than two
/// tab-separated fields are rejected as malformed. Both sides are trimmed.
pub fn parse_tab_separated(content: &str) -> Vec<Card> {
    let mut cards = Vec::new();

    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        let Some((question, answer)) = line.split_once('\t') else {
            continue;
        };
        if answer.contains('\t') {
            warn!(line = idx + 1, "skipping line with more than two fields");
            continue;
        }
        cards.push(Card::new(question.trim(), answer.trim()));
    }

    cards
}

/// Parse delimited (CSV) content into cards.
///
/// Rows with fewer than two fields are skipped; extra fields beyond the
/// first two are ignored. Records the reader cannot parse are skipped
/// rather than failing the whole import.
pub fn parse_delimited(content: &str, delimiter: u8) -> Vec<Card> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(content.as_bytes());

    let mut cards = Vec::new();
    for (idx, result) in reader.records().enumerate() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                warn!(row = idx + 1, error = %e, "skipping unreadable row");
                continue;
            }
        };

        match (record.get(0), record.get(1)) {
            (Some(question), Some(answer)) => {
                cards.push(Card::new(question, answer));
            }
            _ => continue,
        }
    }

    cards
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tab_line_with_one_tab_yields_trimmed_card() {
        let cards = parse_tab_separated("  What is Rust? \tA language.  \n");
        assert_eq!(cards, vec![Card::new("What is Rust?", "A language.")]);
    }

    #[test]
    fn tab_line_without_tab_is_skipped() {
        let cards = parse_tab_separated("just a sentence\nQ\tA");
        assert_eq!(cards, vec![Card::new("Q", "A")]);
    }

    #[test]
    fn tab_line_with_three_fields_is_rejected() {
        let cards = parse_tab_separated("a\tb\tc\nkeep\tthis");
        assert_eq!(cards, vec![Card::new("keep", "this")]);
    }

    #[test]
    fn tab_empty_content_yields_no_cards() {
        assert!(parse_tab_separated("").is_empty());
        assert!(parse_tab_separated("\n\n").is_empty());
    }

    #[test]
    fn delimited_uses_first_two_fields_only() {
        let cards = parse_delimited("q1,a1,extra,more\nq2,a2\n", b',');
        assert_eq!(
            cards,
            vec![Card::new("q1", "a1"), Card::new("q2", "a2")]
        );
    }

    #[test]
    fn delimited_skips_rows_with_fewer_than_two_fields() {
        let cards = parse_delimited("lonely\nq;a\n", b';');
        assert_eq!(cards, vec![Card::new("q", "a")]);
    }

    #[test]
    fn delimited_honors_quoted_fields() {
        let cards = parse_delimited("\"a;b\";\"answer \"\"quoted\"\"\"\n", b';');
        assert_eq!(cards, vec![Card::new("a;b", "answer \"quoted\"")]);
    }

    #[test]
    fn delimited_empty_content_yields_no_cards() {
        assert!(parse_delimited("", b',').is_empty());
    }
}
