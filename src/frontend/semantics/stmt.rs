//! Statement productions.

use std::rc::Rc;

use mc_syntax::{CompileError, Location};

use crate::frontend::ast::{Declaration, Expr, Stmt};
use crate::frontend::diagnostics::{CompileResult, errors};

use super::Semantics;

impl Semantics {
    /// Check the condition of an `if`, `while`, or conditional expression.
    pub fn on_condition(&self, condition: Expr) -> CompileResult<Expr> {
        self.require_boolean(condition)
    }

    pub fn on_block_statement(&self, statements: Vec<Stmt>) -> Stmt {
        Stmt::Block(statements)
    }

    /// `if (c) s` builds a `when`; with an `else` branch it builds an `if`.
    pub fn on_if_statement(&self, condition: Expr, then_branch: Stmt, else_branch: Option<Stmt>) -> Stmt {
        match else_branch {
            Some(else_branch) => Stmt::If {
                condition,
                then_branch: Box::new(then_branch),
                else_branch: Box::new(else_branch),
            },
            None => Stmt::When {
                condition,
                body: Box::new(then_branch),
            },
        }
    }

    pub fn on_while_statement(&self, condition: Expr, body: Stmt) -> Stmt {
        Stmt::While {
            condition,
            body: Box::new(body),
        }
    }

    pub fn on_break_statement(&self, location: Location) -> CompileResult<Stmt> {
        self.require_loop("break", location)?;
        Ok(Stmt::Break)
    }

    pub fn on_continue_statement(&self, location: Location) -> CompileResult<Stmt> {
        self.require_loop("continue", location)?;
        Ok(Stmt::Continue)
    }

    fn require_loop(&self, keyword: &str, location: Location) -> CompileResult<()> {
        if self.loop_depth == 0 {
            Err(CompileError::syntax(format!("'{keyword}' outside of a loop"), location))
        } else {
            Ok(())
        }
    }

    /// `return e;` inside the current function.
    ///
    /// ## Errors
    /// - Syntax error outside of a function.
    /// - Type error if the value is missing or its type is not exactly the function's return type.
    pub fn on_return_statement(&self, value: Option<Expr>, location: Location) -> CompileResult<Stmt> {
        let Some(function) = self.function.as_ref().and_then(|decl| decl.as_function()) else {
            return Err(CompileError::syntax("'return' outside of a function", location));
        };
        let expected = function.return_type();
        let Some(value) = value else {
            return Err(CompileError::type_error(
                format!("missing return value: expected '{expected}'"),
                location,
            ));
        };

        let value = self.require_value(value)?;
        if !value.ty().is_same_as(expected) {
            return Err(errors::type_mismatch(&expected.to_string(), &value.ty().to_string(), value.location()));
        }
        Ok(Stmt::Return(Some(value)))
    }

    pub fn on_declaration_statement(&self, decl: Rc<Declaration>) -> Stmt {
        Stmt::Decl(decl)
    }

    pub fn on_expression_statement(&self, expr: Expr) -> Stmt {
        Stmt::Expr(expr)
    }
}
