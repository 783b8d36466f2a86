//! Define the reserved keyword vocabulary for the MC language.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a
//! const metadata table ([`KEYWORDS`]) that records canonical spellings, categories, and provenance.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - Not every reserved word lexes as a keyword token. Literal words (`true`, `false`) become boolean literals,
//!   type words (`int`, ...) become type specifiers, and word operators (`and`, `or`, `not`) become logical
//!   operators. The category records which substitution applies.
//!
//! ## Examples
//! ```rust
//! use mc_core::lang::keywords::{self, KeywordCategory, KeywordId};
//!
//! assert_eq!(keywords::from_str("def"), Some(KeywordId::Def));
//! assert_eq!(keywords::category(KeywordId::And), KeywordCategory::Operator);
//! ```
//!
//! ## See also
//! - [`crate::lang::operators`] for the operator a word operator stands for.

use super::operators::OperatorId;
use super::registry::{Since, Stability};
use super::types::BasicTypeId;

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Control flow / statements
    If,
    Else,
    While,
    Break,
    Continue,
    Return,

    // Definitions / bindings
    Def,
    Var,
    Let,

    // Expressions
    As,

    // Literals
    True,
    False,

    // Type specifiers
    Bool,
    Char,
    Int,
    Float,

    // Word operators
    And,
    Or,
    Not,
}

/// High-level grouping for documentation and for the lexer's reserved-word substitution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    ControlFlow,
    Definition,
    Expression,
    Literal,
    Type,
    Operator,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
    pub description: &'static str,
    pub since: Since,
    pub stability: Stability,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Control flow / statements
    info(KeywordId::If, "if", KeywordCategory::ControlFlow, "Conditional statement."),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow, "Alternative branch of an `if`."),
    info(KeywordId::While, "while", KeywordCategory::ControlFlow, "Pre-tested loop."),
    info(KeywordId::Break, "break", KeywordCategory::ControlFlow, "Leave the innermost loop."),
    info(
        KeywordId::Continue,
        "continue",
        KeywordCategory::ControlFlow,
        "Start the next iteration of the innermost loop.",
    ),
    info(
        KeywordId::Return,
        "return",
        KeywordCategory::ControlFlow,
        "Return a value from the enclosing function.",
    ),
    // Definitions / bindings
    info(
        KeywordId::Def,
        "def",
        KeywordCategory::Definition,
        "Define a value (`def x: T = e;`) or a function (`def f(...) -> T`).",
    ),
    info(KeywordId::Var, "var", KeywordCategory::Definition, "Define an assignable variable."),
    info(KeywordId::Let, "let", KeywordCategory::Definition, "Define a constant."),
    // Expressions
    info(KeywordId::As, "as", KeywordCategory::Expression, "Explicit conversion (`e as T`)."),
    // Literals
    info(KeywordId::True, "true", KeywordCategory::Literal, "Boolean literal."),
    info(KeywordId::False, "false", KeywordCategory::Literal, "Boolean literal."),
    // Type specifiers
    info(KeywordId::Bool, "bool", KeywordCategory::Type, "Boolean type."),
    info(KeywordId::Char, "char", KeywordCategory::Type, "Character type."),
    info(KeywordId::Int, "int", KeywordCategory::Type, "Signed integer type."),
    info(KeywordId::Float, "float", KeywordCategory::Type, "Floating-point type."),
    // Word operators
    info(KeywordId::And, "and", KeywordCategory::Operator, "Logical conjunction (same as `&&`)."),
    info(KeywordId::Or, "or", KeywordCategory::Operator, "Logical disjunction (same as `||`)."),
    info(KeywordId::Not, "not", KeywordCategory::Operator, "Logical negation (same as `!`)."),
];

/// Canonical spelling.
///
/// ## Parameters
/// - `id`: Keyword identifier.
///
/// ## Returns
/// - The canonical spelling for `id`.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling matches this registry.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

/// The logical operator a word operator stands for.
///
/// ## Returns
/// - `Some(OperatorId)` for `and`, `or`, `not`.
/// - `None` for every other keyword.
pub fn operator_for(id: KeywordId) -> Option<OperatorId> {
    match id {
        KeywordId::And => Some(OperatorId::LogicalAnd),
        KeywordId::Or => Some(OperatorId::LogicalOr),
        KeywordId::Not => Some(OperatorId::LogicalNot),
        _ => None,
    }
}

/// The basic type a type-specifier keyword names.
pub fn type_for(id: KeywordId) -> Option<BasicTypeId> {
    match id {
        KeywordId::Bool => Some(BasicTypeId::Bool),
        KeywordId::Char => Some(BasicTypeId::Char),
        KeywordId::Int => Some(BasicTypeId::Int),
        KeywordId::Float => Some(BasicTypeId::Float),
        _ => None,
    }
}

/// The boolean value a literal keyword denotes.
pub fn literal_for(id: KeywordId) -> Option<bool> {
    match id {
        KeywordId::True => Some(true),
        KeywordId::False => Some(false),
        _ => None,
    }
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    category: KeywordCategory,
    description: &'static str,
) -> KeywordInfo {
    KeywordInfo {
        id,
        canonical,
        category,
        description,
        since: Since(0, 1),
        stability: Stability::Stable,
    }
}
