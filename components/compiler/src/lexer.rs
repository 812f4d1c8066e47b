//! Lexer - converts DSL source text into a token sequence

use crate::error::{lexical_error, CompileError};
use crate::keyword::keyword_kind;
use crate::token::{Token, TokenKind, Tokens};
use std::sync::Arc;

/// Tokenize `source`, tagging every token with `file` for diagnostics.
///
/// Scans left to right in a single pass. Space and newline are skipped,
/// `//` comments are discarded through end of line, and any unrecognized
/// character is a fatal lexical error.
pub fn tokenize(source: &str, file: &str) -> Result<Tokens, CompileError> {
    Lexer::new(source, file).run()
}

struct Lexer {
    chars: Vec<char>,
    file: Arc<str>,
    index: usize,
    row: u32,
    col: u32,
}

impl Lexer {
    fn new(source: &str, file: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            file: Arc::from(file),
            index: 0,
            row: 0,
            col: 0,
        }
    }

    fn run(mut self) -> Result<Tokens, CompileError> {
        let mut tokens = Vec::new();

        while !self.is_at_end() {
            let ch = self.peek();

            if ch.is_ascii_digit() {
                tokens.push(self.scan_number());
            } else if ch.is_ascii_alphabetic() {
                tokens.push(self.scan_identifier_or_keyword());
            } else if ch == ' ' || ch == '\n' {
                self.advance();
            } else if ch == '/' {
                let (row, col, start) = (self.row, self.col, self.index);
                self.advance();

                // A second slash makes it a line comment, otherwise division
                if !self.is_at_end() && self.peek() == '/' {
                    while !self.is_at_end() && self.peek() != '\n' {
                        self.advance();
                    }
                    if !self.is_at_end() {
                        self.advance();
                    }
                } else {
                    tokens.push(self.make_token(TokenKind::Slash, "/", row, col, start));
                }
            } else if ch == '"' {
                tokens.push(self.scan_string()?);
            } else if let Some(kind) = single_char_kind(ch) {
                let (row, col, start) = (self.row, self.col, self.index);
                self.advance();
                tokens.push(self.make_token(kind, ch.to_string(), row, col, start));
            } else {
                return Err(lexical_error(
                    format!("Unknown character: '{ch}'"),
                    &self.file,
                    self.row,
                    self.col,
                ));
            }
        }

        let eof = Token {
            kind: TokenKind::Eof,
            value: String::new(),
            file: self.file.clone(),
            row: self.row,
            col: self.col,
            start: self.index,
            end: self.index,
        };

        Ok(Tokens::new(tokens, eof))
    }

    /// Maximal run of digits. Integer lexemes only; no floats, no sign.
    fn scan_number(&mut self) -> Token {
        let (row, col, start) = (self.row, self.col, self.index);
        let mut text = String::new();
        text.push(self.advance());

        while !self.is_at_end() && self.peek().is_ascii_digit() {
            text.push(self.advance());
        }

        self.make_token(TokenKind::LitNumber, text, row, col, start)
    }

    /// Maximal run of letters/digits, classified via the keyword table.
    fn scan_identifier_or_keyword(&mut self) -> Token {
        let (row, col, start) = (self.row, self.col, self.index);
        let mut text = String::new();
        text.push(self.advance());

        while !self.is_at_end() && self.peek().is_ascii_alphanumeric() {
            text.push(self.advance());
        }

        let kind = keyword_kind(&text).unwrap_or(TokenKind::Identifier);
        self.make_token(kind, text, row, col, start)
    }

    /// Consume through the closing quote. The lexeme keeps both quotes;
    /// the parser strips them.
    fn scan_string(&mut self) -> Result<Token, CompileError> {
        let (row, col, start) = (self.row, self.col, self.index);
        let mut text = String::new();
        text.push(self.advance());

        loop {
            if self.is_at_end() {
                return Err(lexical_error("Unterminated string", &self.file, row, col));
            }

            let ch = self.advance();
            text.push(ch);

            if ch == '"' {
                break;
            }
        }

        Ok(self.make_token(TokenKind::LitString, text, row, col, start))
    }

    fn make_token(
        &self,
        kind: TokenKind,
        value: impl Into<String>,
        row: u32,
        col: u32,
        start: usize,
    ) -> Token {
        Token {
            kind,
            value: value.into(),
            file: self.file.clone(),
            row,
            col,
            start,
            end: self.index,
        }
    }

    fn is_at_end(&self) -> bool {
        self.index >= self.chars.len()
    }

    fn peek(&self) -> char {
        self.chars[self.index]
    }

    fn advance(&mut self) -> char {
        let ch = self.chars[self.index];
        self.index += 1;

        if ch == '\n' {
            self.row += 1;
            self.col = 0;
        } else {
            self.col += 1;
        }

        ch
    }
}

fn single_char_kind(ch: char) -> Option<TokenKind> {
    match ch {
        '{' => Some(TokenKind::LBrace),
        '}' => Some(TokenKind::RBrace),
        '(' => Some(TokenKind::LParen),
        ')' => Some(TokenKind::RParen),
        '+' => Some(TokenKind::Plus),
        '-' => Some(TokenKind::Minus),
        '*' => Some(TokenKind::Star),
        '%' => Some(TokenKind::Percent),
        '.' => Some(TokenKind::Dot),
        '=' => Some(TokenKind::Eq),
        _ => None,
    }
}
