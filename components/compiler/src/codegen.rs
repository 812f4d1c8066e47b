//! JavaScript code generation from the AST
//!
//! Walks the tree depth-first in source order, consulting the UI element
//! schema for property legality and the scope arena for variable legality.
//! The emitted script defines one function taking the container DOM node.

use crate::ast::{Block, Expr, Property, Root, Stmt};
use crate::error::{semantic_error_at, CompileError};
use crate::scope::{ScopeArena, ScopeId};
use crate::token::Token;
use crate::ui;

/// Name of the container parameter every emission appends into.
const CONTAINER: &str = "container";

/// Generate the output script for a parsed program.
pub fn codegen(root: &Root) -> Result<String, CompileError> {
    JsCodegen::new().generate(root)
}

/// Code generation context: the scope arena plus the temporary-name counter.
///
/// The counter is local to the context, so generation runs are independent
/// and re-entrant; re-running on identical input yields identical output.
pub struct JsCodegen {
    scopes: ScopeArena,
    var_id: u32,
}

impl JsCodegen {
    /// Create a fresh generation context.
    pub fn new() -> Self {
        Self {
            scopes: ScopeArena::new(),
            var_id: 0,
        }
    }

    /// Generate `function _entry(container) { ... }` wrapping all statements.
    pub fn generate(&mut self, root: &Root) -> Result<String, CompileError> {
        let scope = self.scopes.root();
        let mut stmts = Vec::new();

        for stmt in &root.stmts {
            stmts.push(self.gen_stmt(stmt, scope)?);
        }

        Ok(format!(
            "function _entry({CONTAINER}) {{\n{}\n}}\n",
            stmts.join("\n")
        ))
    }

    /// Synthesize a collision-free name. User identifiers are alphanumeric
    /// and can never contain the `_` prefix.
    fn fresh_var(&mut self) -> String {
        let name = format!("_v{}", self.var_id);
        self.var_id += 1;
        name
    }

    fn gen_stmt(&mut self, stmt: &Stmt, scope: ScopeId) -> Result<String, CompileError> {
        match stmt {
            Stmt::Declare { variable, value } => self.gen_declare(variable, value.as_ref(), scope),
            Stmt::Assign { variable, value } => self.gen_assign(variable, value, scope),
            Stmt::PlaceUi { ui } => Ok(format!("{};", self.gen_expr(ui, scope)?)),
            Stmt::Loop { count, index, body } => self.gen_loop(count, index.as_ref(), body, scope),
        }
    }

    fn gen_declare(
        &mut self,
        variable: &Token,
        value: Option<&Expr>,
        scope: ScopeId,
    ) -> Result<String, CompileError> {
        let name = &variable.value;

        // Shadowing a visible outer binding is always rejected
        if self.scopes.has_symbol(scope, name) {
            return Err(semantic_error_at(
                format!("Variable '{name}' is already declared"),
                variable,
            ));
        }
        self.scopes.add_symbol(scope, name);

        match value {
            Some(expr) => Ok(format!("let {name} = {};", self.gen_expr(expr, scope)?)),
            None => Ok(format!("let {name};")),
        }
    }

    fn gen_assign(
        &mut self,
        variable: &Token,
        value: &Expr,
        scope: ScopeId,
    ) -> Result<String, CompileError> {
        let name = &variable.value;

        if !self.scopes.has_symbol(scope, name) {
            return Err(semantic_error_at(
                format!("Variable '{name}' is not declared"),
                variable,
            ));
        }

        Ok(format!("{name} = {};", self.gen_expr(value, scope)?))
    }

    fn gen_loop(
        &mut self,
        count: &Expr,
        index: Option<&Token>,
        body: &Block,
        scope: ScopeId,
    ) -> Result<String, CompileError> {
        let child = self.scopes.inherit(scope);

        let counter = match index {
            Some(token) => {
                if self.scopes.has_symbol(child, &token.value) {
                    return Err(semantic_error_at(
                        format!("Variable '{}' is already declared", token.value),
                        token,
                    ));
                }
                self.scopes.add_symbol(child, &token.value);
                token.value.clone()
            }
            None => self.fresh_var(),
        };

        // The count is evaluated in the enclosing scope, not the body's
        let count_js = self.gen_expr(count, scope)?;
        let body_js = self.gen_block_stmts(body, child)?;

        Ok(format!(
            "for (let {counter} = 0; {counter} < ({count_js}); {counter}++) {{\n{body_js}\n}}"
        ))
    }

    fn gen_block_stmts(&mut self, block: &Block, scope: ScopeId) -> Result<String, CompileError> {
        let mut stmts = Vec::new();

        for stmt in &block.stmts {
            stmts.push(self.gen_stmt(stmt, scope)?);
        }

        Ok(stmts.join("\n"))
    }

    fn gen_expr(&mut self, expr: &Expr, scope: ScopeId) -> Result<String, CompileError> {
        match expr {
            Expr::LitNumber(value) => Ok(value.to_string()),
            Expr::LitString(value) => Ok(format!("\"{value}\"")),
            Expr::Identifier(token) => {
                if !self.scopes.has_symbol(scope, &token.value) {
                    return Err(semantic_error_at(
                        format!("Variable '{}' is not declared", token.value),
                        token,
                    ));
                }
                Ok(token.value.clone())
            }
            Expr::Binop { op, lhs, rhs } => {
                // Parentheses reflect the resolved tree, not the source spelling
                let lhs = self.gen_expr(lhs, scope)?;
                let rhs = self.gen_expr(rhs, scope)?;
                Ok(format!("({lhs} {} {rhs})", op.value))
            }
            Expr::Block(block) => {
                let child = self.scopes.inherit(scope);
                let body = self.gen_block_stmts(block, child)?;
                Ok(format!("() => {{\n{body}\n}}"))
            }
            Expr::ObjCall { name, properties } => self.gen_obj_call(name, properties, scope),
        }
    }

    /// An object call becomes an IIFE that constructs the node, assigns each
    /// property through its schema-resolved mutation in source order, and
    /// yields the node as the call's value.
    fn gen_obj_call(
        &mut self,
        name: &Token,
        properties: &[Property],
        scope: ScopeId,
    ) -> Result<String, CompileError> {
        let element = ui::lookup_element(&name.value).ok_or_else(|| {
            semantic_error_at(format!("No UI element named '{}'", name.value), name)
        })?;

        let var = self.fresh_var();
        let mut lines = vec![element.construct(CONTAINER, &var)];

        for property in properties {
            let Some(ui_property) = element.property(&property.name.value) else {
                return Err(semantic_error_at(
                    format!(
                        "Property '{}' does not exist on {}",
                        property.name.value, element.name
                    ),
                    &property.name,
                ));
            };

            let value = self.gen_expr(&property.value, scope)?;
            lines.push(format!("{var}.{} = {value};", ui_property.js_path));
        }

        lines.push(format!("return {var};"));

        Ok(format!("(() => {{\n{}\n}})()", lines.join("\n")))
    }
}

impl Default for JsCodegen {
    fn default() -> Self {
        Self::new()
    }
}
