//! Token types for the MC lexer
//!
//! A token is a kind plus a source location. Kinds that need a value carry it as the variant's payload, so the
//! "attribute present iff the kind requires one" rule holds by construction.
//!
//! ## Notes
//! - The attribute accessors ([`Token::symbol`], [`Token::integer`], ...) fail fast: asking a token for an
//!   attribute its kind does not carry is a programming error and panics.
//! - `Display` renders tokens in dump form, e.g. `<relational-operator:eq>` or `<identifier:count>`.

use std::fmt;

use crate::interner::Symbol;
use crate::location::Location;
use mc_core::lang::escapes;
use mc_core::lang::keywords::{self, KeywordCategory, KeywordId};
use mc_core::lang::literals::Radix;
use mc_core::lang::operators::{self, OperatorCategory, OperatorId};
use mc_core::lang::punctuation::{self, PunctuationId};
use mc_core::lang::types::{self as basic_types, BasicTypeId};

// ============================================================================
// TOKEN TYPES
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Delimiters, separators, and `->`.
    Punctuation(PunctuationId),
    /// Any operator; its category comes from the operator registry.
    Operator(OperatorId),
    /// Reserved words that stay keywords (`def`, `if`, `as`, ...).
    Keyword(KeywordId),
    /// `bool`, `char`, `int`, `float`.
    TypeSpecifier(BasicTypeId),
    Identifier(Symbol),
    /// Unsigned literal, at most [`crate::lexer::MAX_INTEGER_LITERAL`].
    Integer { radix: Radix, value: i64 },
    Float(f64),
    Boolean(bool),
    Character(char),
    String(Symbol),
    Eof,
}

impl TokenKind {
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    pub fn is_eof(&self) -> bool {
        matches!(self, TokenKind::Eof)
    }

    /// The operator category, for operator tokens.
    pub fn operator_category(&self) -> Option<OperatorCategory> {
        match self {
            TokenKind::Operator(op) => Some(operators::category(*op)),
            _ => None,
        }
    }
}

/// Map a reserved word to the token kind it lexes as.
///
/// ## Notes
/// - Literal words become [`TokenKind::Boolean`], type words become [`TokenKind::TypeSpecifier`], and word
///   operators become the matching logical [`TokenKind::Operator`]. Everything else stays a keyword.
pub fn reserved_kind(id: KeywordId) -> TokenKind {
    match keywords::category(id) {
        KeywordCategory::Literal => match keywords::literal_for(id) {
            Some(value) => TokenKind::Boolean(value),
            None => TokenKind::Keyword(id),
        },
        KeywordCategory::Type => match keywords::type_for(id) {
            Some(ty) => TokenKind::TypeSpecifier(ty),
            None => TokenKind::Keyword(id),
        },
        KeywordCategory::Operator => match keywords::operator_for(id) {
            Some(op) => TokenKind::Operator(op),
            None => TokenKind::Keyword(id),
        },
        _ => TokenKind::Keyword(id),
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub location: Location,
}

impl Token {
    pub fn new(kind: TokenKind, location: Location) -> Self {
        Self { kind, location }
    }

    /// The interned name of an identifier token.
    pub fn symbol(&self) -> &Symbol {
        match &self.kind {
            TokenKind::Identifier(sym) => sym,
            _ => self.contract_violation("an identifier"),
        }
    }

    pub fn operator(&self) -> OperatorId {
        match self.kind {
            TokenKind::Operator(op) => op,
            _ => self.contract_violation("an operator"),
        }
    }

    pub fn type_specifier(&self) -> BasicTypeId {
        match self.kind {
            TokenKind::TypeSpecifier(ty) => ty,
            _ => self.contract_violation("a type specifier"),
        }
    }

    /// The value of an integer literal.
    pub fn integer(&self) -> i64 {
        match self.kind {
            TokenKind::Integer { value, .. } => value,
            _ => self.contract_violation("an integer literal"),
        }
    }

    /// The radix an integer literal was written in.
    pub fn radix(&self) -> Radix {
        match self.kind {
            TokenKind::Integer { radix, .. } => radix,
            _ => self.contract_violation("an integer literal"),
        }
    }

    pub fn float(&self) -> f64 {
        match self.kind {
            TokenKind::Float(value) => value,
            _ => self.contract_violation("a floating-point literal"),
        }
    }

    pub fn boolean(&self) -> bool {
        match self.kind {
            TokenKind::Boolean(value) => value,
            _ => self.contract_violation("a boolean literal"),
        }
    }

    pub fn character(&self) -> char {
        match self.kind {
            TokenKind::Character(value) => value,
            _ => self.contract_violation("a character literal"),
        }
    }

    /// The interned contents of a string literal.
    pub fn string(&self) -> &Symbol {
        match &self.kind {
            TokenKind::String(sym) => sym,
            _ => self.contract_violation("a string literal"),
        }
    }

    fn contract_violation(&self, wanted: &str) -> ! {
        panic!("INVARIANT: token {} at {} is not {}", self.kind, self.location, wanted)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Punctuation(p) => write!(f, "<{}>", punctuation::name(*p)),
            TokenKind::Operator(op) => match operators::category(*op) {
                category @ (OperatorCategory::Conditional | OperatorCategory::Assignment) => {
                    write!(f, "<{}>", category.name())
                }
                category => write!(f, "<{}:{}>", category.name(), operators::mnemonic(*op)),
            },
            TokenKind::Keyword(k) => write!(f, "<{}>", keywords::as_str(*k)),
            TokenKind::TypeSpecifier(ty) => write!(f, "<type-specifier:{}>", basic_types::as_str(*ty)),
            TokenKind::Identifier(sym) => write!(f, "<identifier:{sym}>"),
            TokenKind::Integer { radix, value } => {
                write!(f, "<{}:{}", radix.token_name(), radix.prefix())?;
                match radix {
                    Radix::Binary => write!(f, "{value:b}>"),
                    Radix::Decimal => write!(f, "{value}>"),
                    Radix::Hexadecimal => write!(f, "{value:x}>"),
                }
            }
            TokenKind::Float(value) => write!(f, "<floating-point:{value:?}>"),
            TokenKind::Boolean(value) => write!(f, "<boolean:{value}>"),
            TokenKind::Character(c) => write!(f, "<character:{}>", Escaped(&c.to_string())),
            TokenKind::String(sym) => write!(f, "<string:{}>", Escaped(sym.as_str())),
            TokenKind::Eof => write!(f, "<end-of-input>"),
        }
    }
}

/// Writes text with escape-table characters spelled as escapes.
struct Escaped<'a>(&'a str);

impl fmt::Display for Escaped<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.chars() {
            match escapes::escape(c) {
                Some(spelling) => f.write_str(spelling)?,
                None => write!(f, "{c}")?,
            }
        }
        Ok(())
    }
}
