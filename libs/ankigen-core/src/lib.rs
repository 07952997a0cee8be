//! Core flashcard library shared by the CLI and the Gemini transport crate.
//!
//! Provides:
//! - Import parsers for tab-separated and delimited card files
//! - CSV export writer with configurable delimiter
//! - Response interpreter that recovers cards from raw LLM output
//! - Generation orchestrator over a pluggable `LlmClient`
//! - Shared types (Card, GenerationRequest) and error types

pub mod error;
pub mod export;
pub mod generate;
pub mod import;
pub mod interpret;
pub mod prompt;
pub mod types;

pub use error::{ExportError, LlmError};
pub use export::write_cards;
pub use generate::{Generator, LlmClient};
pub use import::{parse_delimited, parse_tab_separated};
pub use interpret::extract_cards;
pub use types::{Card, GenerationRequest};

/// Default delimiter for exported card files.
pub const DEFAULT_EXPORT_DELIMITER: u8 = b';';
