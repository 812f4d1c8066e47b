//! Tata UI DSL Compiler
//!
//! Compiles a declarative UI layout description (written with localized
//! keywords) into imperative JavaScript that builds the equivalent DOM tree
//! and wires up bindings, loops, and event handlers.
//!
//! # Overview
//!
//! - [`tokenize`] - Converts source text into a classified token sequence
//! - [`Tokens`] - Cursor over the token sequence with lookahead
//! - [`parse`] - Recursive descent parser producing the AST
//! - [`Root`] - Abstract syntax tree root
//! - [`codegen`] - Emits the DOM-building JavaScript
//! - [`CompileError`] - Position-tagged fatal error; the first error ends
//!   the compile
//!
//! The pipeline is a single synchronous pass with no backtracking across
//! stages; all file I/O belongs to the surrounding driver.
//!
//! # Example
//!
//! ```
//! let source = "declare count as 0\nplace Tombol { text \"Halo\" }";
//! let js = compiler::compile(source, "main.tata").unwrap();
//! assert!(js.contains("document.createElement('button')"));
//! assert!(js.contains("let count = 0;"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod codegen;
pub mod error;
pub mod keyword;
pub mod lexer;
pub mod parser;
pub mod scope;
pub mod token;
pub mod ui;

pub use ast::{Block, Expr, Property, Root, Stmt};
pub use codegen::{codegen, JsCodegen};
pub use error::{CompileError, ErrorKind};
pub use lexer::tokenize;
pub use parser::parse;
pub use scope::{ScopeArena, ScopeId};
pub use token::{Token, TokenKind, Tokens};
pub use ui::{lookup_element, UiElement, UiProperty};

/// Run the whole pipeline on `source`: tokenize, parse, generate.
///
/// `file` is used only to tag diagnostics. Returns the generated script or
/// the first error encountered.
pub fn compile(source: &str, file: &str) -> Result<String, CompileError> {
    let tokens = tokenize(source, file)?;
    let root = parse(tokens)?;
    codegen(&root)
}
