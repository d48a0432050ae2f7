//! Type definitions shared across the crate.

use thiserror::Error;

/// Errors that can occur around a code title transform.
///
/// The transform itself never fails. Errors only come from the helpers that
/// parse Markdown into an AST or read options strictly.
#[derive(Error, Debug)]
pub enum CodeTitleError {
    /// Failed to parse AST.
    #[error("Failed to parse AST: {0}")]
    AstParse(String),

    /// Options value could not be deserialized.
    #[error("Invalid code title options: {0}")]
    Options(#[from] serde_json::Error),
}

/// Result type for code title operations.
pub type CodeTitleResult<T> = Result<T, CodeTitleError>;
