//! Keyword table: the closed mapping from surface spellings to token kinds

use crate::token::TokenKind;

/// Look up an identifier-shaped lexeme in the keyword table.
///
/// The surface language is localized; the English spellings are accepted as
/// aliases of the same keywords. Returns `None` for plain identifiers.
pub fn keyword_kind(lexeme: &str) -> Option<TokenKind> {
    match lexeme {
        "buat" | "declare" => Some(TokenKind::KeywordDeclare),
        "sebagai" | "as" => Some(TokenKind::KeywordAs),
        "pasang" | "place" => Some(TokenKind::KeywordPlace),
        "ulang" | "loop" => Some(TokenKind::KeywordLoop),
        "indeks" | "index" => Some(TokenKind::KeywordIndex),
        _ => None,
    }
}
