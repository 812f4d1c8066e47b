//! Contract tests for the compile pipeline API
//!
//! These tests verify the compiler component implements its contract:
//! tokenize -> parse -> codegen, each stage returning a Result with a
//! position-tagged error on the first fault.

use compiler::{codegen, parse, tokenize, CompileError, ErrorKind, Root, TokenKind, Tokens};

#[test]
fn test_tokenize_returns_token_stream() {
    let result: Result<Tokens, CompileError> = tokenize("declare x", "main.tata");
    let mut tokens = result.unwrap();
    assert!(tokens.has_next());
    assert_eq!(tokens.peek(1).kind, TokenKind::KeywordDeclare);
    assert_eq!(tokens.next().value, "declare");
}

#[test]
fn test_parse_returns_root() {
    let tokens = tokenize("declare x as 1", "main.tata").unwrap();
    let result: Result<Root, CompileError> = parse(tokens);
    assert_eq!(result.unwrap().stmts.len(), 1);
}

#[test]
fn test_codegen_returns_script_text() {
    let tokens = tokenize("declare x as 1", "main.tata").unwrap();
    let root = parse(tokens).unwrap();
    let js = codegen(&root).unwrap();
    assert!(js.contains("function _entry(container)"));
}

#[test]
fn test_lexical_errors_carry_position() {
    let err = tokenize("declare x\n  ?", "main.tata").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Lexical);
    assert_eq!(err.file, "main.tata");
    assert_eq!(err.row, 1);
    assert_eq!(err.col, 2);
}

#[test]
fn test_syntax_errors_carry_position() {
    let tokens = tokenize("declare 5", "main.tata").unwrap();
    let err = parse(tokens).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Syntax);
    assert_eq!(err.file, "main.tata");
    assert_eq!((err.row, err.col), (0, 8));
}

#[test]
fn test_semantic_errors_carry_position() {
    let tokens = tokenize("place Foo { }", "main.tata").unwrap();
    let root = parse(tokens).unwrap();
    let err = codegen(&root).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Semantic);
    assert_eq!((err.row, err.col), (0, 6));
}

#[test]
fn test_error_display_format() {
    let err = compiler::compile("place Foo { }", "main.tata").unwrap_err();
    let text = err.to_string();
    let (message, position) = text.split_once("\nat:\n").unwrap();
    assert!(message.contains("Foo"));
    assert_eq!(position, "main.tata:1:7");
}

#[test]
fn test_compile_runs_the_full_pipeline() {
    let js = compiler::compile("place Label { text \"hi\" }", "main.tata").unwrap();
    assert!(js.contains("document.createElement('div')"));
}
