//! Lexical layer for the MC language: symbol interner, source locations, tokens, lexer, diagnostics.
//!
//! This crate is dependency-light and shared by the `mcc` front end and any tooling that only needs tokens.
//!
//! ## Notes
//! - This crate is intentionally "lexical-only": it does not parse, resolve names, or check types.
//! - Vocabulary identity (keywords/operators/punctuation/escapes) comes from `mc_core::lang` registries.
//! - The interner is an explicit context object. Each compilation owns one and lends it to its lexer.
//!
//! ## Examples
//! ```rust
//! use mc_syntax::interner::Interner;
//! use mc_syntax::lexer;
//!
//! let mut interner = Interner::new();
//! let tokens = lexer::lex("var x : int = 0;", &mut interner).unwrap();
//! assert_eq!(tokens.len(), 8); // seven tokens plus end-of-input
//! ```

#![forbid(unsafe_code)]

pub mod diagnostics;
pub mod interner;
pub mod lexer;
pub mod location;
pub mod token;

pub use diagnostics::{CompileError, CompileResult, ErrorKind};
pub use interner::{Interner, Symbol};
pub use location::{Location, SourceFile};
pub use token::{Token, TokenKind};
