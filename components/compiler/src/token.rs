//! Token types and the token stream consumed by the parser

use crate::error::{syntax_error_at, CompileError};
use std::sync::Arc;

/// Token classification.
///
/// One closed enumeration covering keywords, identifiers, bracket/operator
/// glyphs, literals, and the synthetic end-of-input marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `pasang` / `place` - insert a UI element into the container
    KeywordPlace,
    /// `buat` / `declare` - introduce a variable binding
    KeywordDeclare,
    /// `sebagai` / `as` - bind a value to a variable
    KeywordAs,
    /// `ulang` / `loop` - repeat a block
    KeywordLoop,
    /// `indeks` / `index` - name the loop counter binding
    KeywordIndex,

    /// Variable or element name
    Identifier,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,
    /// `%`
    Percent,
    /// `.`
    Dot,
    /// `=`
    Eq,

    /// Integer literal
    LitNumber,
    /// String literal (lexeme keeps its quotes; the parser strips them)
    LitString,

    /// Synthetic end-of-input marker
    Eof,
}

/// A classified lexeme with its source position.
///
/// `row` and `col` are zero-based and point at the start of the lexeme;
/// they exist only for diagnostics. Tokens are immutable once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Classification of the lexeme
    pub kind: TokenKind,
    /// Raw lexeme text
    pub value: String,
    /// Source file path
    pub file: Arc<str>,
    /// Zero-based line at the lexeme start
    pub row: u32,
    /// Zero-based column at the lexeme start
    pub col: u32,
    /// Byte-independent character offset of the first character
    pub start: usize,
    /// Character offset one past the last character
    pub end: usize,
}

/// Cursor over the token sequence with 1-based lookahead.
///
/// Any lookahead past the end of the real sequence yields the synthetic
/// [`TokenKind::Eof`] token, so consumers never special-case "no more
/// tokens" separately from "wrong kind".
#[derive(Debug, Clone)]
pub struct Tokens {
    tokens: Vec<Token>,
    index: usize,
    eof: Token,
}

impl Tokens {
    /// Create a stream over `tokens`, with `eof` as the synthetic end marker.
    pub fn new(tokens: Vec<Token>, eof: Token) -> Self {
        Self {
            tokens,
            index: 0,
            eof,
        }
    }

    /// Whether any real token remains unconsumed.
    pub fn has_next(&self) -> bool {
        self.index < self.tokens.len()
    }

    /// Look ahead without consuming. `peek(1)` is the next unconsumed token.
    pub fn peek(&self, n: usize) -> &Token {
        debug_assert!(n >= 1, "lookahead is 1-based");
        self.tokens.get(self.index + n - 1).unwrap_or(&self.eof)
    }

    /// Consume and return the next token (the EOF token once exhausted).
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Token {
        match self.tokens.get(self.index) {
            Some(token) => {
                self.index += 1;
                token.clone()
            }
            None => self.eof.clone(),
        }
    }

    /// Consume the next token, failing if its kind is not one of `kinds`.
    ///
    /// The error names the expected kind(s) and the actual kind and is
    /// tagged with the offending token's position.
    pub fn next_expect(&mut self, kinds: &[TokenKind]) -> Result<Token, CompileError> {
        let token = self.next();

        if kinds.contains(&token.kind) {
            return Ok(token);
        }

        let expected = kinds
            .iter()
            .map(|kind| format!("{kind:?}"))
            .collect::<Vec<_>>()
            .join(" | ");

        Err(syntax_error_at(
            format!("Expected {expected}, got {:?}", token.kind),
            &token,
        ))
    }
}
