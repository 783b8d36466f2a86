//! Provide the canonical language vocabulary for the MC compiler front end.
//!
//! This crate is intentionally small and dependency-free. It holds the registry tables that the lexer,
//! parser, diagnostics, and tooling share so that spellings and metadata never drift apart.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, and no compiler-specific types.
//! - Syntax rules are enforced by `mc_syntax` (lexing) and the `mcc` front end (parsing); the registries only
//!   answer "what is this spelling" and "how is this item described".

pub mod lang;
