//! Punctuation vocabulary.
//!
//! This module defines the canonical set of non-operator punctuation tokens used by the lexer/parser:
//! delimiters, separators, and the `->` return-type arrow.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - This module is vocabulary only (spellings + metadata). It does not tokenize source text.
//!
//! ## Examples
//! ```rust
//! use mc_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("->"), Some(PunctuationId::Arrow));
//! assert_eq!(punctuation::name(PunctuationId::LBrace), "left-brace");
//! ```

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Brackets and braces.
    Delimiter,
    /// Separators like `,`, `;` and `:`.
    Separator,
    /// The `->` marker.
    Arrow,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    // Delimiters
    LBrace,
    RBrace,
    LParen,
    RParen,
    LBracket,
    RBracket,

    // Separators
    Comma,
    Semicolon,
    Colon,

    // Arrows
    Arrow,
}

/// Metadata for a punctuation token.
///
/// ## Notes
/// - `name` is the hyphenated form printed in token dumps and "expected ..." diagnostics.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub name: &'static str,
    pub category: PunctuationCategory,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    // Delimiters
    info(PunctuationId::LBrace, "{", "left-brace", PunctuationCategory::Delimiter),
    info(PunctuationId::RBrace, "}", "right-brace", PunctuationCategory::Delimiter),
    info(PunctuationId::LParen, "(", "left-paren", PunctuationCategory::Delimiter),
    info(PunctuationId::RParen, ")", "right-paren", PunctuationCategory::Delimiter),
    info(PunctuationId::LBracket, "[", "left-bracket", PunctuationCategory::Delimiter),
    info(PunctuationId::RBracket, "]", "right-bracket", PunctuationCategory::Delimiter),
    // Separators
    info(PunctuationId::Comma, ",", "comma", PunctuationCategory::Separator),
    info(PunctuationId::Semicolon, ";", "semicolon", PunctuationCategory::Separator),
    info(PunctuationId::Colon, ":", "colon", PunctuationCategory::Separator),
    // Arrows
    info(PunctuationId::Arrow, "->", "arrow", PunctuationCategory::Arrow),
];

/// Return the full metadata entry for a punctuation token.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("punctuation info missing")
}

/// Canonical spelling.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Hyphenated display name.
pub fn name(id: PunctuationId) -> &'static str {
    info_for(id).name
}

/// Lookup by spelling.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

const fn info(
    id: PunctuationId,
    canonical: &'static str,
    name: &'static str,
    category: PunctuationCategory,
) -> PunctuationInfo {
    PunctuationInfo {
        id,
        canonical,
        name,
        category,
    }
}
