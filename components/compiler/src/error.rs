//! Compile error types and helpers

use crate::token::Token;
use thiserror::Error;

/// The class of compile error.
///
/// All three classes share one propagation policy: the first error ends the
/// compile. The kind exists so callers (and tests) can tell which stage
/// rejected the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input at the character level
    Lexical,
    /// Structurally invalid token sequence
    Syntax,
    /// Valid structure with an invalid meaning (unknown element, bad scope use)
    Semantic,
}

/// A fatal compile error tagged with the source position that produced it.
///
/// Displays as the message followed by an `at:` trailer with a 1-based
/// `file:line:column` location.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}\nat:\n{file}:{}:{}", .row + 1, .col + 1)]
pub struct CompileError {
    /// Which stage rejected the input
    pub kind: ErrorKind,
    /// Human-readable message
    pub message: String,
    /// Source file path
    pub file: String,
    /// Zero-based line of the offending lexeme
    pub row: u32,
    /// Zero-based column of the offending lexeme
    pub col: u32,
}

/// Create a lexical error at a given cursor position
pub fn lexical_error(message: impl Into<String>, file: &str, row: u32, col: u32) -> CompileError {
    CompileError {
        kind: ErrorKind::Lexical,
        message: message.into(),
        file: file.to_string(),
        row,
        col,
    }
}

/// Create a syntax error at the position of the offending token
pub fn syntax_error_at(message: impl Into<String>, token: &Token) -> CompileError {
    CompileError {
        kind: ErrorKind::Syntax,
        message: message.into(),
        file: token.file.to_string(),
        row: token.row,
        col: token.col,
    }
}

/// Create a semantic error at the position of the offending token
pub fn semantic_error_at(message: impl Into<String>, token: &Token) -> CompileError {
    CompileError {
        kind: ErrorKind::Semantic,
        message: message.into(),
        file: token.file.to_string(),
        row: token.row,
        col: token.col,
    }
}
