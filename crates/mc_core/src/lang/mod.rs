//! MC language vocabulary registries.
//!
//! This module is the "front door" for language-level vocabulary: reserved keywords, operators,
//! punctuation, basic type specifiers, literal radixes, and character escapes.
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings/metadata via
//! registry tables instead of scattering string comparisons across the front end.
//!
//! ## Notes
//! - Registries are intentionally **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries provide spellings and metadata for shared use (token display,
//!   diagnostics, documentation).
//!
//! ## Examples
//! ```rust
//! use mc_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("while"), Some(KeywordId::While));
//! assert_eq!(keywords::as_str(KeywordId::While), "while");
//! ```

pub mod escapes;
pub mod keywords;
pub mod literals;
pub mod operators;
pub mod punctuation;
pub mod registry;
pub mod types;
