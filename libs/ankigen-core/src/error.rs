//! Error types for ankigen-core.

use thiserror::Error;

/// Errors that can occur while writing a card file.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during LLM operations.
///
/// The generation orchestrator treats every variant except `MissingApiKey`
/// as non-fatal: the failure is logged and the operation degrades to an
/// empty card sequence.
#[derive(Debug, Error)]
pub enum LlmError {
    /// No API credential was supplied. Raised before any request is made.
    #[error("an API key is required for LLM access")]
    MissingApiKey,

    /// HTTP request failed.
    #[error("LLM request failed: {0}")]
    RequestFailed(String),

    /// Request timed out.
    #[error("LLM request timed out after {0}ms")]
    Timeout(u64),

    /// Provider is unreachable.
    #[error("LLM provider unavailable: {0}")]
    Unavailable(String),

    /// The API answered with a non-success status.
    #[error("LLM API error: HTTP {status} - {message}")]
    Api { status: u16, message: String },

    /// The response body did not have the expected shape.
    #[error("failed to read LLM response: {0}")]
    Parse(String),
}
