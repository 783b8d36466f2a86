//! Typed statements.

use std::rc::Rc;

use super::decl::Declaration;
use super::expr::Expr;

/// A checked statement. Conditions have already been converted to `bool`.
#[derive(Debug, Clone)]
pub enum Stmt {
    Block(Vec<Stmt>),
    /// `if` without an `else` branch.
    When { condition: Expr, body: Box<Stmt> },
    If { condition: Expr, then_branch: Box<Stmt>, else_branch: Box<Stmt> },
    While { condition: Expr, body: Box<Stmt> },
    Break,
    Continue,
    Return(Option<Expr>),
    /// A local object declaration.
    Decl(Rc<Declaration>),
    Expr(Expr),
}
