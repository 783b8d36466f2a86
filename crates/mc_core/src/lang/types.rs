//! Basic (scalar) type vocabulary.
//!
//! The four built-in scalar types are spelled with reserved words and lex as type-specifier tokens. Composite
//! types (pointers, references, functions) are built by the analyzer and have no registry entry.
//!
//! ## Examples
//! ```rust
//! use mc_core::lang::types::{self, BasicTypeId};
//!
//! assert_eq!(types::from_str("float"), Some(BasicTypeId::Float));
//! assert_eq!(types::as_str(BasicTypeId::Char), "char");
//! ```

/// Stable identifier for the scalar types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasicTypeId {
    Bool,
    Char,
    Int,
    Float,
}

/// Metadata for a scalar type.
///
/// ## Notes
/// - `bit_width` is the fixed machine width a backend is expected to use.
#[derive(Debug, Clone, Copy)]
pub struct BasicTypeInfo {
    pub id: BasicTypeId,
    pub canonical: &'static str,
    pub bit_width: u8,
}

/// Registry of the scalar types.
pub const BASIC_TYPES: &[BasicTypeInfo] = &[
    BasicTypeInfo {
        id: BasicTypeId::Bool,
        canonical: "bool",
        bit_width: 1,
    },
    BasicTypeInfo {
        id: BasicTypeId::Char,
        canonical: "char",
        bit_width: 32,
    },
    BasicTypeInfo {
        id: BasicTypeId::Int,
        canonical: "int",
        bit_width: 32,
    },
    BasicTypeInfo {
        id: BasicTypeId::Float,
        canonical: "float",
        bit_width: 32,
    },
];

/// Return the full metadata entry for a scalar type.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: BasicTypeId) -> &'static BasicTypeInfo {
    BASIC_TYPES.iter().find(|t| t.id == id).expect("basic type info missing")
}

/// Canonical spelling.
pub fn as_str(id: BasicTypeId) -> &'static str {
    info_for(id).canonical
}

/// Lookup by spelling.
pub fn from_str(s: &str) -> Option<BasicTypeId> {
    BASIC_TYPES.iter().find(|t| t.canonical == s).map(|t| t.id)
}
