//! Recursive descent parser for the DSL

use crate::ast::{Block, Expr, Property, Root, Stmt};
use crate::error::{syntax_error_at, CompileError};
use crate::token::{Token, TokenKind, Tokens};

/// Parse the token stream into an AST.
///
/// Statement dispatch is by the kind of the next token; any structural
/// mismatch is a fatal syntax error with no recovery.
pub fn parse(tokens: Tokens) -> Result<Root, CompileError> {
    Parser { tokens }.parse_root()
}

// Matches conventional arithmetic precedence:
// https://developer.mozilla.org/en-US/docs/Web/JavaScript/Reference/Operators/Operator_precedence
fn binop_precedence(value: &str) -> Option<u8> {
    match value {
        "+" | "-" => Some(11),
        "*" | "/" | "%" => Some(12),
        _ => None,
    }
}

struct Parser {
    tokens: Tokens,
}

impl Parser {
    fn parse_root(&mut self) -> Result<Root, CompileError> {
        let mut stmts = Vec::new();

        while self.tokens.has_next() {
            stmts.push(self.parse_stmt()?);
        }

        Ok(Root { stmts })
    }

    fn parse_stmt(&mut self) -> Result<Stmt, CompileError> {
        let peek = self.tokens.peek(1).clone();

        match peek.kind {
            TokenKind::Identifier => {
                if self.tokens.peek(2).kind == TokenKind::KeywordAs {
                    self.parse_assign()
                } else {
                    Err(syntax_error_at(
                        format!("Identifier '{}' does not start a statement", peek.value),
                        &peek,
                    ))
                }
            }
            TokenKind::KeywordDeclare => self.parse_declare(),
            TokenKind::KeywordPlace => self.parse_place_ui(),
            TokenKind::KeywordLoop => self.parse_loop(),
            kind => Err(syntax_error_at(
                format!("Unexpected {kind:?} at start of statement"),
                &peek,
            )),
        }
    }

    fn parse_declare(&mut self) -> Result<Stmt, CompileError> {
        self.tokens.next_expect(&[TokenKind::KeywordDeclare])?;
        let variable = self.tokens.next_expect(&[TokenKind::Identifier])?;
        let mut value = None;

        if self.tokens.peek(1).kind == TokenKind::KeywordAs {
            self.tokens.next();
            value = Some(self.parse_expr()?);
        }

        Ok(Stmt::Declare { variable, value })
    }

    fn parse_assign(&mut self) -> Result<Stmt, CompileError> {
        let variable = self.tokens.next_expect(&[TokenKind::Identifier])?;
        self.tokens.next_expect(&[TokenKind::KeywordAs])?;
        let value = self.parse_expr()?;

        Ok(Stmt::Assign { variable, value })
    }

    fn parse_place_ui(&mut self) -> Result<Stmt, CompileError> {
        self.tokens.next_expect(&[TokenKind::KeywordPlace])?;
        let ui = self.parse_expr()?;

        Ok(Stmt::PlaceUi { ui })
    }

    fn parse_loop(&mut self) -> Result<Stmt, CompileError> {
        self.tokens.next_expect(&[TokenKind::KeywordLoop])?;
        let count = self.parse_expr()?;
        let mut index = None;

        if self.tokens.peek(1).kind == TokenKind::KeywordIndex {
            self.tokens.next();
            index = Some(self.tokens.next_expect(&[TokenKind::Identifier])?);
        }

        let body = self.parse_block()?;

        Ok(Stmt::Loop { count, index, body })
    }

    /// Precedence climbing over a flat operand/operator sequence.
    ///
    /// Reduction scans adjacent operator pairs left to right and reduces at
    /// the first position where the left precedence is >= the right one,
    /// which yields left-associative, precedence-correct trees.
    fn parse_expr(&mut self) -> Result<Expr, CompileError> {
        let mut exprs = vec![self.parse_primary_expr()?];
        let mut ops: Vec<(Token, u8)> = Vec::new();

        while let Some(prec) = binop_precedence(&self.tokens.peek(1).value) {
            ops.push((self.tokens.next(), prec));
            exprs.push(self.parse_primary_expr()?);
        }

        while exprs.len() > 1 {
            let mut index = 0;

            for i in 0..ops.len() - 1 {
                if ops[i].1 >= ops[i + 1].1 {
                    index = i;
                    break;
                }
                index = i + 1;
            }

            let lhs = exprs.remove(index);
            let rhs = exprs.remove(index);
            let (op, _) = ops.remove(index);

            exprs.insert(
                index,
                Expr::Binop {
                    op,
                    lhs: Box::new(lhs),
                    rhs: Box::new(rhs),
                },
            );
        }

        Ok(exprs.remove(0))
    }

    fn parse_primary_expr(&mut self) -> Result<Expr, CompileError> {
        let peek = self.tokens.peek(1).clone();

        match peek.kind {
            TokenKind::Identifier => {
                if self.tokens.peek(2).kind == TokenKind::LBrace {
                    self.parse_obj_call()
                } else {
                    Ok(Expr::Identifier(self.tokens.next()))
                }
            }
            TokenKind::LitNumber => {
                let token = self.tokens.next();
                let value = token.value.parse::<i64>().map_err(|_| {
                    syntax_error_at(format!("Number literal '{}' is too large", token.value), &token)
                })?;
                Ok(Expr::LitNumber(value))
            }
            TokenKind::LitString => {
                let token = self.tokens.next();
                // The lexeme includes the surrounding quotes
                let inner = token.value[1..token.value.len() - 1].to_string();
                Ok(Expr::LitString(inner))
            }
            TokenKind::LBrace => Ok(Expr::Block(self.parse_block()?)),
            TokenKind::LParen => {
                self.tokens.next();
                let expr = self.parse_expr()?;
                self.tokens.next_expect(&[TokenKind::RParen])?;
                Ok(expr)
            }
            kind => Err(syntax_error_at(
                format!("Unexpected {kind:?} at start of expression"),
                &peek,
            )),
        }
    }

    /// Property pairs have no separator token; adjacency plus the fixed
    /// `identifier expression` grammar delimits them.
    fn parse_obj_call(&mut self) -> Result<Expr, CompileError> {
        let name = self.tokens.next_expect(&[TokenKind::Identifier])?;
        let mut properties = Vec::new();

        self.tokens.next_expect(&[TokenKind::LBrace])?;

        while self.tokens.peek(1).kind != TokenKind::RBrace {
            properties.push(self.parse_property()?);
        }

        self.tokens.next_expect(&[TokenKind::RBrace])?;

        Ok(Expr::ObjCall { name, properties })
    }

    fn parse_property(&mut self) -> Result<Property, CompileError> {
        let name = self.tokens.next_expect(&[TokenKind::Identifier])?;
        let value = self.parse_expr()?;

        Ok(Property { name, value })
    }

    fn parse_block(&mut self) -> Result<Block, CompileError> {
        self.tokens.next_expect(&[TokenKind::LBrace])?;
        let mut stmts = Vec::new();

        while self.tokens.peek(1).kind != TokenKind::RBrace {
            stmts.push(self.parse_stmt()?);
        }

        self.tokens.next_expect(&[TokenKind::RBrace])?;

        Ok(Block { stmts })
    }
}
