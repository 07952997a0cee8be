//! Interactive menu shell.
//!
//! All console interaction lives here; the core operations it invokes are
//! console-free and independently testable. Failures abort the current
//! menu action with a printed message, never the process.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use ankigen_core::{Card, GenerationRequest, Generator, DEFAULT_EXPORT_DELIMITER};
use ankigen_llm::{GeminiClient, GeminiConfig};

use crate::files;

const PREVIEW_LIMIT: usize = 3;
const BATCH_DEFAULT_COUNT: usize = 50;

pub async fn run() -> anyhow::Result<()> {
    println!("\n===== Ankigen =====");
    println!("Create and manage flashcard files");

    loop {
        println!("\nChoose an option:");
        println!("1. Create cards from a text/CSV file");
        println!("2. Create a folder for card files");
        println!("3. Generate cards with Gemini");
        println!("4. Batch create folders and cards");
        println!("5. Open a folder and create cards by topic");
        println!("6. Exit");

        match prompt("\nEnter your choice: ")?.as_str() {
            "1" => import_from_file()?,
            "2" => create_folder()?,
            "3" => generate_with_gemini().await?,
            "4" => batch_create().await?,
            "5" => topic_workflow().await?,
            "6" => {
                println!("\nGoodbye!");
                return Ok(());
            }
            _ => println!("\nInvalid choice. Please try again."),
        }
    }
}

// === Menu actions ===

fn import_from_file() -> anyhow::Result<()> {
    println!("\n-- Creating cards from a file --");
    let path = PathBuf::from(prompt("Enter file path: ")?);
    if !path.exists() {
        println!("File not found!");
        return Ok(());
    }

    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    let delimiter = if is_csv {
        Some(prompt_delimiter("Enter input delimiter (default ','): ", b',')?)
    } else {
        None
    };

    let cards = match files::read_cards(&path, delimiter) {
        Ok(cards) => cards,
        Err(e) => {
            println!("Import failed: {e:#}");
            return Ok(());
        }
    };
    println!("Created {} cards from file", cards.len());
    preview_cards(&cards);

    if !cards.is_empty() && prompt_yes_no("Save cards to CSV? (y/n): ")? {
        save_interactively(&cards)?;
    }
    Ok(())
}

fn create_folder() -> anyhow::Result<()> {
    println!("\n-- Creating a folder for card files --");
    let path = PathBuf::from(prompt("Enter folder path: ")?);
    if path.as_os_str().is_empty() {
        println!("No folder given. Operation cancelled.");
        return Ok(());
    }
    report_folder(&path);
    Ok(())
}

async fn generate_with_gemini() -> anyhow::Result<()> {
    println!("\n-- Generating cards with Gemini --");
    let Some(client) = build_client()? else {
        return Ok(());
    };

    let topic = prompt("Enter the topic for the flashcards: ")?;
    if topic.is_empty() {
        println!("Topic cannot be empty. Operation cancelled.");
        return Ok(());
    }

    let count = prompt_count("Number of cards to generate (default 10): ", 10)?;
    let mut request = GenerationRequest::new(topic).with_count(count);

    if prompt_yes_no("Use custom formatting instructions? (y/n): ")? {
        println!("Enter instructions (press Enter twice to finish):");
        let instructions = read_multiline()?;
        if !instructions.is_empty() {
            request = request.with_format_instructions(instructions);
        }
    }

    println!("Generating cards with Gemini...");
    let cards = Generator::new(client).generate(&request).await;
    println!("Generated {} cards", cards.len());
    preview_cards(&cards);

    if !cards.is_empty() && prompt_yes_no("\nSave cards to CSV? (y/n): ")? {
        save_interactively(&cards)?;
    }
    Ok(())
}

async fn batch_create() -> anyhow::Result<()> {
    println!("\n-- Batch creating folders and cards --");
    println!("Enter folder names (comma-separated allowed). Type DONE when finished:");
    let mut folders = Vec::new();
    loop {
        let line = prompt("")?;
        if line.eq_ignore_ascii_case("done") {
            break;
        }
        folders.extend(
            line.split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .map(String::from),
        );
    }
    if folders.is_empty() {
        println!("No folders specified.");
        return Ok(());
    }

    let base = prompt("Base directory (leave blank for current directory): ")?;
    let base = if base.is_empty() {
        std::env::current_dir()?
    } else {
        PathBuf::from(base)
    };

    let count = prompt_count(
        &format!("Cards per folder (default {BATCH_DEFAULT_COUNT}): "),
        BATCH_DEFAULT_COUNT,
    )?;

    println!("\nHow should cards be produced?");
    println!("1. Empty placeholder files");
    println!("2. Generate with Gemini");
    let generator = if prompt("Enter choice (1-2): ")? == "2" {
        match build_client()? {
            Some(client) => Some(Generator::new(client)),
            None => {
                println!("Falling back to empty placeholder files.");
                None
            }
        }
    } else {
        None
    };

    for folder in &folders {
        let folder_path = base.join(folder);
        if !report_folder(&folder_path) {
            continue;
        }

        let cards = match &generator {
            Some(generator) => {
                println!("Generating cards for '{folder}'...");
                let request = GenerationRequest::new(folder.clone()).with_count(count);
                let cards = generator.generate(&request).await;
                println!("Generated {} cards for '{folder}'", cards.len());
                cards
            }
            None => Vec::new(),
        };

        let csv_path = folder_path.join(format!("{folder}_cards.csv"));
        save_and_report(&cards, &csv_path, DEFAULT_EXPORT_DELIMITER);
    }

    println!("\nCreated {} folders with card files.", folders.len());
    Ok(())
}

async fn topic_workflow() -> anyhow::Result<()> {
    println!("\n-- Open a folder and create cards by topic --");
    let folder = PathBuf::from(prompt("Enter folder path: ")?);
    if folder.as_os_str().is_empty() {
        println!("No folder given. Operation cancelled.");
        return Ok(());
    }

    if !folder.exists() {
        let question = format!(
            "Folder '{}' doesn't exist. Create it? (y/n): ",
            folder.display()
        );
        if !prompt_yes_no(&question)? {
            println!("Operation cancelled.");
            return Ok(());
        }
        if !report_folder(&folder) {
            return Ok(());
        }
    }

    let topic = prompt("\nEnter the topic for your flashcards: ")?;
    if topic.is_empty() {
        println!("Topic cannot be empty. Operation cancelled.");
        return Ok(());
    }

    let mut file_path = folder.join(format!("{}_cards.csv", files::safe_file_stem(&topic)));
    if file_path.exists() {
        let question = format!(
            "File '{}' already exists. Overwrite? (y/n): ",
            file_path.display()
        );
        if !prompt_yes_no(&question)? {
            file_path = folder.join(format!(
                "{}_{}_cards.csv",
                files::safe_file_stem(&topic),
                chrono::Utc::now().timestamp()
            ));
            println!("Will save to new file: {}", file_path.display());
        }
    }

    println!("\nHow would you like to create cards?");
    println!("1. Manual input");
    println!("2. Generate with Gemini");
    let cards = match prompt("Enter choice (1-2): ")?.as_str() {
        "1" => manual_entry()?,
        "2" => {
            let Some(client) = build_client()? else {
                return Ok(());
            };
            let count = prompt_count("Number of cards to generate (default 10): ", 10)?;
            let request = GenerationRequest::new(topic).with_count(count);
            println!("Generating cards with Gemini...");
            let cards = Generator::new(client).generate(&request).await;
            println!("Generated {} cards", cards.len());
            preview_cards(&cards);
            cards
        }
        _ => {
            println!("Invalid choice. Operation cancelled.");
            return Ok(());
        }
    };

    if cards.is_empty() {
        println!("No cards created. File not saved.");
        return Ok(());
    }

    let delimiter = prompt_delimiter("Enter delimiter for CSV (default ';'): ", DEFAULT_EXPORT_DELIMITER)?;
    save_and_report(&cards, &file_path, delimiter);
    Ok(())
}

// === Helpers ===

/// Build a Gemini client from `GEMINI_API_KEY` or an interactive prompt.
/// Returns `None` (with a message) when no usable credential is supplied.
fn build_client() -> anyhow::Result<Option<GeminiClient>> {
    let api_key = match std::env::var("GEMINI_API_KEY") {
        Ok(key) if !key.trim().is_empty() => key,
        _ => prompt("Enter your Gemini API key: ")?,
    };

    match GeminiClient::new(GeminiConfig::new(api_key)) {
        Ok(client) => Ok(Some(client)),
        Err(e) => {
            println!("{e}. Operation cancelled.");
            Ok(None)
        }
    }
}

fn manual_entry() -> anyhow::Result<Vec<Card>> {
    println!("\nEnter your flashcards (empty question to finish):");
    let mut cards = Vec::new();
    loop {
        let question = prompt("\nQuestion: ")?;
        if question.is_empty() {
            break;
        }
        let answer = prompt("Answer: ")?;
        cards.push(Card::new(question, answer));
    }
    Ok(cards)
}

fn save_interactively(cards: &[Card]) -> anyhow::Result<()> {
    let path = PathBuf::from(prompt("Enter output CSV path: ")?);
    if path.as_os_str().is_empty() {
        println!("No path given. Cards not saved.");
        return Ok(());
    }
    if path.exists() && !prompt_yes_no("File already exists. Overwrite? (y/n): ")? {
        println!("Cards not saved.");
        return Ok(());
    }

    let delimiter = prompt_delimiter("Enter delimiter (default ';'): ", DEFAULT_EXPORT_DELIMITER)?;
    save_and_report(cards, &path, delimiter);
    Ok(())
}

fn preview_cards(cards: &[Card]) {
    if cards.is_empty() {
        return;
    }
    println!("\nPreview:");
    for (i, card) in cards.iter().take(PREVIEW_LIMIT).enumerate() {
        println!("\nCard {}:", i + 1);
        println!("Q: {}", card.question);
        println!("A: {}", card.answer);
    }
    if cards.len() > PREVIEW_LIMIT {
        println!("\n... plus {} more cards", cards.len() - PREVIEW_LIMIT);
    }
}

/// Create the folder if needed and report the outcome. I/O failures are
/// printed, not propagated, so a bad path aborts only the current action.
fn report_folder(path: &Path) -> bool {
    match files::ensure_folder(path) {
        Ok(true) => {
            println!("Created folder: {}", path.display());
            true
        }
        Ok(false) => {
            println!("Folder already exists: {}", path.display());
            true
        }
        Err(e) => {
            println!("Folder creation failed: {e:#}");
            false
        }
    }
}

/// Write the cards and report the outcome. I/O failures are printed, not
/// propagated.
fn save_and_report(cards: &[Card], path: &Path, delimiter: u8) -> bool {
    match files::save_cards(cards, path, delimiter) {
        Ok(()) => {
            println!("Saved {} cards to {}", cards.len(), path.display());
            true
        }
        Err(e) => {
            println!("Save failed: {e:#}");
            false
        }
    }
}

fn prompt(message: &str) -> io::Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt_yes_no(message: &str) -> io::Result<bool> {
    Ok(prompt(message)?.eq_ignore_ascii_case("y"))
}

fn prompt_count(message: &str, default: usize) -> io::Result<usize> {
    let input = prompt(message)?;
    if input.is_empty() {
        return Ok(default);
    }
    match input.parse() {
        Ok(count) => Ok(count),
        Err(_) => {
            println!("Not a number; using default of {default}.");
            Ok(default)
        }
    }
}

fn prompt_delimiter(message: &str, default: u8) -> io::Result<u8> {
    loop {
        let input = prompt(message)?;
        if input.is_empty() {
            return Ok(default);
        }
        match input.as_bytes() {
            [byte] => return Ok(*byte),
            _ => println!("Delimiter must be a single ASCII character."),
        }
    }
}

fn read_multiline() -> io::Result<String> {
    collect_multiline(|| prompt(""))
}

/// Collect lines until two consecutive empty lines, so instructions can
/// contain blank lines between paragraphs. Trailing blanks are dropped
/// from the result.
fn collect_multiline(mut next_line: impl FnMut() -> io::Result<String>) -> io::Result<String> {
    let mut lines: Vec<String> = Vec::new();
    loop {
        let line = next_line()?;
        if line.is_empty() && lines.last().is_some_and(|prev| prev.is_empty()) {
            break;
        }
        lines.push(line);
    }
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn feed<'a>(input: &'a [&'a str]) -> impl FnMut() -> io::Result<String> + 'a {
        let mut iter = input.iter();
        move || Ok(iter.next().unwrap_or(&"").to_string())
    }

    #[test]
    fn multiline_keeps_blank_lines_between_paragraphs() {
        let text = collect_multiline(feed(&["first", "", "second", "", ""])).unwrap();
        assert_eq!(text, "first\n\nsecond");
    }

    #[test]
    fn multiline_ends_on_two_consecutive_blanks() {
        let text = collect_multiline(feed(&["only line", "", ""])).unwrap();
        assert_eq!(text, "only line");
    }

    #[test]
    fn multiline_with_no_content_is_empty() {
        let text = collect_multiline(feed(&["", ""])).unwrap();
        assert_eq!(text, "");
    }

    #[test]
    fn save_failure_is_reported_not_propagated() {
        let dir = tempdir().unwrap();
        let bad_path = dir.path().join("missing").join("cards.csv");
        let cards = vec![Card::new("q", "a")];
        assert!(!save_and_report(&cards, &bad_path, b';'));
    }

    #[test]
    fn save_success_returns_true() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cards.csv");
        assert!(save_and_report(&[Card::new("q", "a")], &path, b';'));
        assert!(path.exists());
    }

    #[test]
    fn folder_failure_is_reported_not_propagated() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "not a folder").unwrap();
        assert!(!report_folder(&blocker.join("sub")));
    }

    #[test]
    fn folder_creation_and_reuse_both_succeed() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("decks");
        assert!(report_folder(&target));
        assert!(report_folder(&target));
    }
}
