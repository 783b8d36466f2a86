//! Operand category checks.
//!
//! Every check except [`Semantics::require_reference`] first reduces a reference operand to the value it holds,
//! then tests the category of the resulting type.

use crate::frontend::ast::{Conversion, Expr, ExprKind, Type};
use crate::frontend::diagnostics::{CompileResult, errors};

use super::Semantics;

impl Semantics {
    /// Wrap `expr` in a conversion node of type `ty`.
    pub(crate) fn convert(expr: Expr, conversion: Conversion, ty: Type) -> Expr {
        let location = expr.location();
        Expr::new(
            ExprKind::Conversion {
                conversion,
                source: Box::new(expr),
            },
            ty,
            location,
        )
    }

    /// The operand must denote storage. No value conversion is applied.
    pub fn require_reference(&self, expr: Expr) -> CompileResult<Expr> {
        if expr.ty().is_reference() {
            Ok(expr)
        } else {
            Err(errors::category_mismatch("an assignable reference", &expr.ty().to_string(), expr.location())
                .with_note("only variables, parameters, and dereferenced pointers can be assigned"))
        }
    }

    /// Load the value of a reference; anything else is already a value.
    pub fn require_value(&self, expr: Expr) -> CompileResult<Expr> {
        match expr.ty() {
            Type::Reference(inner) => {
                let ty = Type::clone(inner);
                Ok(Self::convert(expr, Conversion::Value, ty))
            }
            _ => Ok(expr),
        }
    }

    /// Value-reduce `expr`, then check its type with `accepts`.
    fn require_category(&self, expr: Expr, expected: &str, accepts: fn(&Type) -> bool) -> CompileResult<Expr> {
        let expr = self.require_value(expr)?;
        if accepts(expr.ty()) {
            Ok(expr)
        } else {
            Err(errors::category_mismatch(expected, &expr.ty().to_string(), expr.location()))
        }
    }

    /// `int` or `float`.
    pub fn require_arithmetic(&self, expr: Expr) -> CompileResult<Expr> {
        self.require_category(expr, "an arithmetic operand", Type::is_arithmetic)
    }

    /// `bool`, `char`, `int`, or `float`.
    pub fn require_numeric(&self, expr: Expr) -> CompileResult<Expr> {
        self.require_category(expr, "a numeric operand", Type::is_numeric)
    }

    /// Numeric or pointer.
    pub fn require_scalar(&self, expr: Expr) -> CompileResult<Expr> {
        self.require_category(expr, "a scalar operand", Type::is_scalar)
    }

    pub fn require_integer(&self, expr: Expr) -> CompileResult<Expr> {
        self.require_category(expr, "an integer operand", Type::is_int)
    }

    pub fn require_function(&self, expr: Expr) -> CompileResult<Expr> {
        self.require_category(expr, "a function", Type::is_function)
    }

    pub fn require_pointer(&self, expr: Expr) -> CompileResult<Expr> {
        self.require_category(expr, "a pointer", Type::is_pointer)
    }

    /// A value usable as a truth value; scalars and functions are tested against zero.
    pub fn require_boolean(&self, expr: Expr) -> CompileResult<Expr> {
        let expr = self.require_value(expr)?;
        let ty = expr.ty();
        if ty.is_bool() {
            Ok(expr)
        } else if ty.is_scalar() || ty.is_function() {
            Ok(Self::convert(expr, Conversion::Bool, Type::Bool))
        } else {
            Err(errors::category_mismatch("a boolean", &ty.to_string(), expr.location()))
        }
    }
}
