//! Typed expressions.

use std::fmt;
use std::rc::{Rc, Weak};

use mc_core::lang::operators::OperatorId;
use mc_syntax::{Location, Symbol};

use super::decl::Declaration;
use super::types::Type;

/// A type-checked expression.
///
/// ## Notes
/// - Built only by the semantic analyzer; immutable afterwards.
/// - [`Expr::ty`] is the type of the denoted value with all conversions already applied.
#[derive(Debug, Clone)]
pub struct Expr {
    kind: ExprKind,
    ty: Type,
    location: Location,
}

#[derive(Debug, Clone)]
pub enum ExprKind {
    Bool(bool),
    /// A literal in `0..=i32::MAX`; `int` is 32-bit signed.
    Int(i64),
    Float(f64),
    Char(char),
    /// A name resolved to its declaration.
    ///
    /// `decl` is a non-owning back-reference; the declaration is owned by the tree that declared it.
    Id { name: Symbol, decl: Weak<Declaration> },
    Unary { op: UnaryOp, operand: Box<Expr> },
    Binary { op: BinaryOp, lhs: Box<Expr>, rhs: Box<Expr> },
    Call { callee: Box<Expr>, args: Vec<Expr> },
    Index { base: Box<Expr>, args: Vec<Expr> },
    /// Explicit `e as T`; `source` is already converted to `T`.
    Cast { source: Box<Expr> },
    Assign { target: Box<Expr>, value: Box<Expr> },
    Conditional { condition: Box<Expr>, then_branch: Box<Expr>, else_branch: Box<Expr> },
    /// Implicit or explicit conversion of `source` to this expression's type.
    Conversion { conversion: Conversion, source: Box<Expr> },
}

impl Expr {
    pub(crate) fn new(kind: ExprKind, ty: Type, location: Location) -> Self {
        Self { kind, ty, location }
    }

    pub fn kind(&self) -> &ExprKind {
        &self.kind
    }

    pub fn ty(&self) -> &Type {
        &self.ty
    }

    pub fn location(&self) -> Location {
        self.location
    }

    /// The declaration an identifier expression resolved to.
    ///
    /// ## Returns
    /// - `None` for non-identifier expressions, or if the owning tree has been dropped.
    pub fn declaration(&self) -> Option<Rc<Declaration>> {
        match &self.kind {
            ExprKind::Id { decl, .. } => decl.upgrade(),
            _ => None,
        }
    }

    /// The conversion tag, for conversion nodes.
    pub fn conversion(&self) -> Option<Conversion> {
        match &self.kind {
            ExprKind::Conversion { conversion, .. } => Some(*conversion),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `+e`
    Pos,
    /// `-e`
    Neg,
    /// `~e` (bitwise complement)
    Cmp,
    /// `!e` / `not e`
    Not,
    /// `&e`
    Addr,
    /// `*e`
    Deref,
}

impl UnaryOp {
    pub fn from_operator(op: OperatorId) -> Option<UnaryOp> {
        Some(match op {
            OperatorId::Plus => UnaryOp::Pos,
            OperatorId::Minus => UnaryOp::Neg,
            OperatorId::Tilde => UnaryOp::Cmp,
            OperatorId::LogicalNot => UnaryOp::Not,
            OperatorId::Amp => UnaryOp::Addr,
            OperatorId::Star => UnaryOp::Deref,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            UnaryOp::Pos => "pos",
            UnaryOp::Neg => "neg",
            UnaryOp::Cmp => "cmp",
            UnaryOp::Not => "not",
            UnaryOp::Addr => "addr",
            UnaryOp::Deref => "deref",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Quo,
    Rem,
    // Bitwise
    And,
    Or,
    Xor,
    Shl,
    Shr,
    // Logical
    LogicalAnd,
    LogicalOr,
    // Relational
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
}

impl BinaryOp {
    pub fn from_operator(op: OperatorId) -> Option<BinaryOp> {
        Some(match op {
            OperatorId::Plus => BinaryOp::Add,
            OperatorId::Minus => BinaryOp::Sub,
            OperatorId::Star => BinaryOp::Mul,
            OperatorId::Slash => BinaryOp::Quo,
            OperatorId::Percent => BinaryOp::Rem,
            OperatorId::Amp => BinaryOp::And,
            OperatorId::Pipe => BinaryOp::Or,
            OperatorId::Caret => BinaryOp::Xor,
            OperatorId::Shl => BinaryOp::Shl,
            OperatorId::Shr => BinaryOp::Shr,
            OperatorId::LogicalAnd => BinaryOp::LogicalAnd,
            OperatorId::LogicalOr => BinaryOp::LogicalOr,
            OperatorId::EqEq => BinaryOp::Eq,
            OperatorId::NotEq => BinaryOp::Ne,
            OperatorId::Lt => BinaryOp::Lt,
            OperatorId::Gt => BinaryOp::Gt,
            OperatorId::LtEq => BinaryOp::Le,
            OperatorId::GtEq => BinaryOp::Ge,
            _ => return None,
        })
    }

    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Sub => "sub",
            BinaryOp::Mul => "mul",
            BinaryOp::Quo => "quo",
            BinaryOp::Rem => "rem",
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
            BinaryOp::Xor => "xor",
            BinaryOp::Shl => "shl",
            BinaryOp::Shr => "shr",
            BinaryOp::LogicalAnd => "land",
            BinaryOp::LogicalOr => "lor",
            BinaryOp::Eq => "eq",
            BinaryOp::Ne => "ne",
            BinaryOp::Lt => "lt",
            BinaryOp::Gt => "gt",
            BinaryOp::Le => "le",
            BinaryOp::Ge => "ge",
        }
    }

    pub fn is_arithmetic(self) -> bool {
        matches!(self, BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Quo | BinaryOp::Rem)
    }

    pub fn is_bitwise(self) -> bool {
        matches!(self, BinaryOp::And | BinaryOp::Or | BinaryOp::Xor | BinaryOp::Shl | BinaryOp::Shr)
    }

    pub fn is_logical(self) -> bool {
        matches!(self, BinaryOp::LogicalAnd | BinaryOp::LogicalOr)
    }

    pub fn is_equality(self) -> bool {
        matches!(self, BinaryOp::Eq | BinaryOp::Ne)
    }

    pub fn is_ordering(self) -> bool {
        matches!(self, BinaryOp::Lt | BinaryOp::Gt | BinaryOp::Le | BinaryOp::Ge)
    }
}

/// The conversion a [`ExprKind::Conversion`] node performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conversion {
    /// Load the value stored at a reference.
    Value,
    /// Any scalar or function to `bool` (non-zero test).
    Bool,
    /// `int` narrowed to `char`.
    Char,
    /// `bool` or `char` widened to `int`.
    Int,
    /// `int` extended to `float`.
    Ext,
    /// `float` truncated to `int`.
    Trunc,
}

impl Conversion {
    pub fn name(self) -> &'static str {
        match self {
            Conversion::Value => "value",
            Conversion::Bool => "bool",
            Conversion::Char => "char",
            Conversion::Int => "int",
            Conversion::Ext => "ext",
            Conversion::Trunc => "trunc",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
