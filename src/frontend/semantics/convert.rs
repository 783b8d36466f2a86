//! Conversion selection and type unification.

use crate::frontend::ast::{Conversion, Expr, Type};
use crate::frontend::diagnostics::{CompileResult, errors};

use super::Semantics;

impl Semantics {
    /// Convert `expr` to `target`, inserting the conversion node the pair requires.
    ///
    /// ## Notes
    /// - An expression already of type `target` is returned unchanged.
    /// - For a non-reference `target` the source is value-reduced first.
    /// - Accepted pairs:
    ///   - to `bool`: any scalar or function (`bool` conversion)
    ///   - to `char`: `int` (`char` conversion)
    ///   - to `int`: `float` (`trunc`), `bool` or `char` (`int`)
    ///   - to `float`: `int` (`ext`)
    ///
    /// ## Errors
    /// - Type error for every other pair.
    pub fn convert_to_type(&self, expr: Expr, target: &Type) -> CompileResult<Expr> {
        if expr.ty().is_same_as(target) {
            return Ok(expr);
        }
        let expr = if target.is_reference() {
            expr
        } else {
            self.require_value(expr)?
        };
        let source = expr.ty();
        if source.is_same_as(target) {
            return Ok(expr);
        }

        let conversion = match target {
            Type::Bool if source.is_scalar() || source.is_function() => Some(Conversion::Bool),
            Type::Char if matches!(source, Type::Int) => Some(Conversion::Char),
            Type::Int if matches!(source, Type::Float) => Some(Conversion::Trunc),
            Type::Int if matches!(source, Type::Bool | Type::Char) => Some(Conversion::Int),
            Type::Float if matches!(source, Type::Int) => Some(Conversion::Ext),
            _ => None,
        };

        match conversion {
            Some(conversion) => Ok(Self::convert(expr, conversion, target.clone())),
            None => Err(errors::cannot_convert(
                &source.to_string(),
                &target.to_string(),
                expr.location(),
            )),
        }
    }

    /// The type both branches of a conditional can be given.
    ///
    /// ## Returns
    /// - The type itself when both are the same.
    /// - The value type when one side is a reference to the other side's type.
    /// - `None` otherwise.
    pub fn common_type(&self, left: &Type, right: &Type) -> Option<Type> {
        if left.is_same_as(right) {
            Some(left.clone())
        } else if left.is_reference_to(right) {
            Some(right.clone())
        } else if right.is_reference_to(left) {
            Some(left.clone())
        } else {
            None
        }
    }
}
