//! Operator vocabulary.
//!
//! This module defines the canonical operator set along with the metadata the front end shares: the operator
//! category a token belongs to, the mnemonic used when printing tokens, and precedence/associativity/fixity.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and covers symbol spellings only. Word spellings
//!   (`and`, `or`, `not`) are reserved words; see [`crate::lang::keywords::operator_for`].
//! - `precedence` is a relative ordering where higher binds tighter. The parser's precedence ladder must agree
//!   with it (a guardrail test checks the ordering).
//!
//! ## Examples
//! ```rust
//! use mc_core::lang::operators::{self, OperatorCategory, OperatorId};
//!
//! assert_eq!(operators::from_str("<<"), Some(OperatorId::Shl));
//! assert_eq!(operators::category(OperatorId::Shl), OperatorCategory::Bitwise);
//! ```

/// Define how operators associate when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

/// Define whether an operator is infix (binary), prefix (unary), or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Infix,
    Prefix,
    InfixOrPrefix,
}

/// The operator families a lexer distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorCategory {
    Relational,
    Arithmetic,
    Bitwise,
    Logical,
    Conditional,
    Assignment,
}

impl OperatorCategory {
    /// The category's display name, as used in token dumps.
    pub fn name(self) -> &'static str {
        match self {
            OperatorCategory::Relational => "relational-operator",
            OperatorCategory::Arithmetic => "arithmetic-operator",
            OperatorCategory::Bitwise => "bitwise-operator",
            OperatorCategory::Logical => "logical-operator",
            OperatorCategory::Conditional => "conditional-operator",
            OperatorCategory::Assignment => "assignment-operator",
        }
    }
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Relational
    EqEq,
    NotEq,
    Lt,
    Gt,
    LtEq,
    GtEq,

    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Bitwise
    Amp,
    Pipe,
    Caret,
    Shl,
    Shr,
    Tilde,

    // Logical
    LogicalAnd,
    LogicalOr,
    LogicalNot,

    // Conditional / assignment
    Question,
    Eq,
}

/// Metadata for an operator.
///
/// ## Notes
/// - `mnemonic` is unique within a category, not globally (`and` is both bitwise and logical).
/// - Prefix-only operators carry the precedence of the unary level.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub mnemonic: &'static str,
    pub category: OperatorCategory,
    pub precedence: u8,
    pub associativity: Associativity,
    pub fixity: Fixity,
}

/// Precedence of the prefix (unary) level.
pub const UNARY_PRECEDENCE: u8 = 130;

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Relational
    op(OperatorId::EqEq, "==", "eq", OperatorCategory::Relational, 70, Associativity::Left, Fixity::Infix),
    op(OperatorId::NotEq, "!=", "ne", OperatorCategory::Relational, 70, Associativity::Left, Fixity::Infix),
    op(OperatorId::Lt, "<", "lt", OperatorCategory::Relational, 80, Associativity::Left, Fixity::Infix),
    op(OperatorId::Gt, ">", "gt", OperatorCategory::Relational, 80, Associativity::Left, Fixity::Infix),
    op(OperatorId::LtEq, "<=", "le", OperatorCategory::Relational, 80, Associativity::Left, Fixity::Infix),
    op(OperatorId::GtEq, ">=", "ge", OperatorCategory::Relational, 80, Associativity::Left, Fixity::Infix),
    // Arithmetic
    op(
        OperatorId::Plus,
        "+",
        "add",
        OperatorCategory::Arithmetic,
        100,
        Associativity::Left,
        Fixity::InfixOrPrefix,
    ),
    op(
        OperatorId::Minus,
        "-",
        "sub",
        OperatorCategory::Arithmetic,
        100,
        Associativity::Left,
        Fixity::InfixOrPrefix,
    ),
    op(
        OperatorId::Star,
        "*",
        "mul",
        OperatorCategory::Arithmetic,
        110,
        Associativity::Left,
        Fixity::InfixOrPrefix,
    ),
    op(OperatorId::Slash, "/", "quo", OperatorCategory::Arithmetic, 110, Associativity::Left, Fixity::Infix),
    op(OperatorId::Percent, "%", "rem", OperatorCategory::Arithmetic, 110, Associativity::Left, Fixity::Infix),
    // Bitwise
    op(
        OperatorId::Amp,
        "&",
        "and",
        OperatorCategory::Bitwise,
        60,
        Associativity::Left,
        Fixity::InfixOrPrefix,
    ),
    op(OperatorId::Pipe, "|", "ior", OperatorCategory::Bitwise, 40, Associativity::Left, Fixity::Infix),
    op(OperatorId::Caret, "^", "xor", OperatorCategory::Bitwise, 50, Associativity::Left, Fixity::Infix),
    op(OperatorId::Shl, "<<", "shl", OperatorCategory::Bitwise, 90, Associativity::Left, Fixity::Infix),
    op(OperatorId::Shr, ">>", "shr", OperatorCategory::Bitwise, 90, Associativity::Left, Fixity::Infix),
    op(
        OperatorId::Tilde,
        "~",
        "not",
        OperatorCategory::Bitwise,
        UNARY_PRECEDENCE,
        Associativity::Right,
        Fixity::Prefix,
    ),
    // Logical
    op(OperatorId::LogicalAnd, "&&", "and", OperatorCategory::Logical, 30, Associativity::Left, Fixity::Infix),
    op(OperatorId::LogicalOr, "||", "or", OperatorCategory::Logical, 20, Associativity::Left, Fixity::Infix),
    op(
        OperatorId::LogicalNot,
        "!",
        "not",
        OperatorCategory::Logical,
        UNARY_PRECEDENCE,
        Associativity::Right,
        Fixity::Prefix,
    ),
    // Conditional / assignment
    op(
        OperatorId::Question,
        "?",
        "cond",
        OperatorCategory::Conditional,
        10,
        Associativity::Right,
        Fixity::Infix,
    ),
    op(OperatorId::Eq, "=", "assign", OperatorCategory::Assignment, 0, Associativity::Right, Fixity::Infix),
];

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Resolve a symbol spelling to its identifier.
///
/// ## Returns
/// - `Some(OperatorId)` if the spelling exists in [`OPERATORS`].
/// - `None` otherwise.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

/// Symbol spelling.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Operator category.
pub fn category(id: OperatorId) -> OperatorCategory {
    info_for(id).category
}

/// Mnemonic used in token dumps.
pub fn mnemonic(id: OperatorId) -> &'static str {
    info_for(id).mnemonic
}

/// Binding strength (higher binds tighter).
pub fn precedence(id: OperatorId) -> u8 {
    info_for(id).precedence
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    spelling: &'static str,
    mnemonic: &'static str,
    category: OperatorCategory,
    precedence: u8,
    associativity: Associativity,
    fixity: Fixity,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        mnemonic,
        category,
        precedence,
        associativity,
        fixity,
    }
}
