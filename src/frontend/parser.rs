//! Parser for the MC programming language
//!
//! A recursive-descent, precedence-climbing parser that pulls tokens from a [`Lexer`] and hands every
//! recognized production to the [`Semantics`] analyzer. No untyped parse tree is built: each parsing method
//! returns the typed node the analyzer produced.
//!
//! ## Examples
//!
//! ```rust
//! use mcc::frontend::ast::Declaration;
//! use mcc::frontend::interner::Interner;
//! use mcc::frontend::lexer::Lexer;
//! use mcc::frontend::parser::Parser;
//!
//! let mut interner = Interner::new();
//! let mut parser = Parser::new(Lexer::new("def one() -> int { return 1; }", &mut interner)).unwrap();
//! let program = parser.parse_program().unwrap();
//! assert_eq!(program.declarations().len(), 1);
//! ```

use std::collections::VecDeque;
use std::rc::Rc;

use crate::frontend::ast::{BinaryOp, DeclKind, Declaration, Expr, Stmt, Type, UnaryOp};
use crate::frontend::diagnostics::{CompileError, CompileResult, errors};
use crate::frontend::interner::{Interner, Symbol};
use crate::frontend::lexer::Lexer;
use crate::frontend::location::{Location, SourceFile};
use crate::frontend::scope::ScopeKind;
use crate::frontend::semantics::Semantics;
use crate::frontend::token::{Token, TokenKind};
use mc_core::lang::keywords::KeywordId;
use mc_core::lang::operators::{self, OperatorCategory, OperatorId};
use mc_core::lang::punctuation::PunctuationId;

// NOTE: split across files with `include!` so every parsing method stays in one module.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/decl.rs");
include!("parser/types.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
