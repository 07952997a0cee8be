//! Export writer for card files.

use std::io::Write;

use crate::error::ExportError;
use crate::types::Card;

/// Write cards as delimited rows, one card per row, no header.
///
/// Standard CSV quoting is applied, so a question or answer containing the
/// delimiter, a quote, or a newline survives a re-parse with the same
/// delimiter. An empty sequence writes nothing. Overwrite policy is the
/// caller's concern.
pub fn write_cards<W: Write>(cards: &[Card], writer: W, delimiter: u8) -> Result<(), ExportError> {
    let mut builder = csv::WriterBuilder::new();
    builder.has_headers(false).delimiter(delimiter);
    // Rows end with the destination platform's native newline.
    #[cfg(windows)]
    builder.terminator(csv::Terminator::CRLF);
    let mut csv_writer = builder.from_writer(writer);

    for card in cards {
        csv_writer.write_record([card.question.as_str(), card.answer.as_str()])?;
    }
    csv_writer.flush()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::parse_delimited;
    use pretty_assertions::assert_eq;

    #[cfg(windows)]
    const EOL: &str = "\r\n";
    #[cfg(not(windows))]
    const EOL: &str = "\n";

    fn write_to_string(cards: &[Card], delimiter: u8) -> String {
        let mut buf = Vec::new();
        write_cards(cards, &mut buf, delimiter).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn writes_one_row_per_card_with_native_line_ending() {
        let cards = vec![Card::new("q1", "a1"), Card::new("q2", "a2")];
        assert_eq!(write_to_string(&cards, b';'), format!("q1;a1{EOL}q2;a2{EOL}"));
    }

    #[test]
    fn empty_sequence_writes_nothing() {
        assert_eq!(write_to_string(&[], b';'), "");
    }

    #[test]
    fn embedded_delimiter_is_quoted() {
        let cards = vec![Card::new("a;b", "c")];
        assert_eq!(write_to_string(&cards, b';'), format!("\"a;b\";c{EOL}"));
    }

    #[test]
    fn round_trips_through_import() {
        let cards = vec![
            Card::new("contains;the delimiter", "and a \"quote\""),
            Card::new("multi\nline question", "plain answer"),
        ];
        let written = write_to_string(&cards, b';');
        assert_eq!(parse_delimited(&written, b';'), cards);
    }
}
