//! Abstract syntax tree for the DSL
//!
//! A closed set of tagged variants, exhaustively matched by every consumer.
//! Nodes are owned exclusively by their parent, built bottom-up during
//! parsing, and never mutated afterward.

use crate::token::Token;

/// Whole program: the top-level statement sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Root {
    /// Statements in source order
    pub stmts: Vec<Stmt>,
}

/// A brace-delimited statement sequence.
///
/// Usable both as a loop body and as an expression that denotes a deferred
/// action (an event-handler thunk).
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// Statements in source order
    pub stmts: Vec<Stmt>,
}

/// A `name value` pair inside an object-call property list.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Property name token
    pub name: Token,
    /// Property value expression
    pub value: Expr,
}

/// Statement variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// Introduce a binding, with an optional initializer
    Declare {
        /// Name being declared
        variable: Token,
        /// Optional initializer
        value: Option<Expr>,
    },
    /// Mutate an existing binding
    Assign {
        /// Name being assigned
        variable: Token,
        /// New value
        value: Expr,
    },
    /// Insert a UI element into the current container
    PlaceUi {
        /// Expression evaluating to a constructed element
        ui: Expr,
    },
    /// Repeat `body` `count` times
    Loop {
        /// Repetition count expression
        count: Expr,
        /// Optional 0-based index binding
        index: Option<Token>,
        /// Loop body
        body: Block,
    },
}

/// Expression variants.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// Construct a UI element of kind `name` with the given properties
    ObjCall {
        /// Element kind name
        name: Token,
        /// Properties in source order
        properties: Vec<Property>,
    },
    /// Statement sequence used as a deferred callable
    Block(Block),
    /// Reference to a declared variable
    Identifier(Token),
    /// Integer literal
    LitNumber(i64),
    /// String literal, quotes already stripped
    LitString(String),
    /// Binary arithmetic
    Binop {
        /// Operator token (`+ - * / %`)
        op: Token,
        /// Left operand
        lhs: Box<Expr>,
        /// Right operand
        rhs: Box<Expr>,
    },
}
