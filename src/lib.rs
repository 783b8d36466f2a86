#![forbid(unsafe_code)]
//! MC Compiler Front End
//!
//! MC is a small imperative language with `bool`, `char`, `int`, `float`, pointers, and first-order functions.
//! This crate turns one source file into a fully typed, scope-resolved tree ready for code generation, and
//! ships the `mcc` command-line driver.
//!
//! ## Examples
//!
//! ```rust
//! use mcc::frontend::interner::Interner;
//! use mcc::frontend::location::SourceFile;
//!
//! let source = SourceFile::new("add.mc", "def add(a : int, b : int) -> int { return a + b; }");
//! let mut interner = Interner::new();
//! let program = mcc::compile(&source, &mut interner).unwrap();
//! assert_eq!(program.declarations().len(), 1);
//! ```
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` module enforces
//!   `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a compiler bug (logic error), use `.expect("INVARIANT: reason")` with a
//!   clear explanation.

pub mod cli;
pub mod frontend;

pub use frontend::ast;
pub use frontend::compile;
pub use frontend::diagnostics;
pub use frontend::lexer;
pub use frontend::parser;
pub use frontend::semantics;
