//! File and folder helpers for the shell.

use std::fs::{self, File};
use std::path::Path;

use anyhow::Context;
use tracing::debug;

use ankigen_core::{export, import, Card};

/// Read cards from a file. A `Some` delimiter selects CSV parsing; `None`
/// selects the tab-separated format.
pub fn read_cards(path: &Path, csv_delimiter: Option<u8>) -> anyhow::Result<Vec<Card>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    Ok(match csv_delimiter {
        Some(delimiter) => import::parse_delimited(&content, delimiter),
        None => import::parse_tab_separated(&content),
    })
}

/// Write cards to a delimited file, overwriting any existing file.
/// Overwrite confirmation is the caller's job.
pub fn save_cards(cards: &[Card], path: &Path, delimiter: u8) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    export::write_cards(cards, file, delimiter)
        .with_context(|| format!("failed to write {}", path.display()))?;
    debug!(path = %path.display(), count = cards.len(), "cards written");
    Ok(())
}

/// Create a folder if it does not exist. Returns whether it was created.
pub fn ensure_folder(path: &Path) -> anyhow::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    fs::create_dir_all(path)
        .with_context(|| format!("failed to create folder {}", path.display()))?;
    Ok(true)
}

/// Derive a filesystem-safe file stem from a topic.
pub fn safe_file_stem(topic: &str) -> String {
    topic
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ankigen_core::Card;
    use tempfile::tempdir;

    #[test]
    fn save_then_read_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cards.csv");
        let cards = vec![
            Card::new("q;with delimiter", "a1"),
            Card::new("q2", "a2"),
        ];

        save_cards(&cards, &path, b';').unwrap();
        let reloaded = read_cards(&path, Some(b';')).unwrap();
        assert_eq!(reloaded, cards);
    }

    #[test]
    fn read_tab_separated_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cards.txt");
        fs::write(&path, "What is Rust?\tA language.\nno tab here\n").unwrap();

        let cards = read_cards(&path, None).unwrap();
        assert_eq!(cards, vec![Card::new("What is Rust?", "A language.")]);
    }

    #[test]
    fn read_missing_file_is_an_error() {
        assert!(read_cards(Path::new("/nonexistent/cards.txt"), None).is_err());
    }

    #[test]
    fn ensure_folder_reports_creation() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("decks/biology");
        assert!(ensure_folder(&target).unwrap());
        assert!(!ensure_folder(&target).unwrap());
    }

    #[test]
    fn safe_file_stem_replaces_special_characters() {
        assert_eq!(safe_file_stem("Rust: Borrow Checker!"), "rust__borrow_checker_");
        assert_eq!(safe_file_stem("plain-topic_1"), "plain-topic_1");
    }
}
