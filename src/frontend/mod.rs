//! MC compiler front end
//!
//! This module contains all front-end components:
//! - `lexer`, `token`, `interner`, `location`, `diagnostics`: the lexical layer, provided by `mc_syntax`
//! - `parser`: recursive-descent parsing that drives semantic actions
//! - `semantics`: name resolution, type checking, and implicit conversions
//! - `scope`: the scope chain used for name resolution
//! - `ast`: the typed tree the analyzer builds

// Lexical components are provided by the shared mc_syntax crate.
pub use mc_syntax::{diagnostics, interner, lexer, location, token};

pub mod ast;
pub mod parser;
pub mod scope;
pub mod semantics;

pub use parser::compile;
