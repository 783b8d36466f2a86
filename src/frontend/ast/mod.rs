//! Typed abstract syntax tree for MC
//!
//! The tree is built exclusively by the semantic analyzer, so every node it contains has already been
//! resolved and type-checked:
//! - every [`Expr`] carries the type of the value it denotes *after* implicit conversions, which are explicit
//!   [`ExprKind::Conversion`] nodes
//! - every identifier expression points back at its [`Declaration`]
//!
//! ## Ownership
//!
//! The tree owns its nodes. Declarations are shared through `Rc` because a declaration is reachable both from
//! its owner (the program, a function's parameter list, or a declaration statement) and from the scope that
//! made it visible during analysis. Identifier expressions hold a `Weak` back-reference, never an owner.

mod decl;
mod dump;
mod expr;
mod stmt;
mod types;

pub use decl::{DeclKind, Declaration, FunctionDecl, ObjectDecl, Program};
pub use dump::dump;
pub use expr::{BinaryOp, Conversion, Expr, ExprKind, UnaryOp};
pub use stmt::Stmt;
pub use types::{FunctionType, Type};
