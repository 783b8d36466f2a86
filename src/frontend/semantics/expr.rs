//! Expression productions.

use std::rc::Rc;

use mc_core::lang::types::BasicTypeId;
use mc_syntax::{CompileError, Location, Symbol};

use crate::frontend::ast::{BinaryOp, Expr, ExprKind, Type, UnaryOp};
use crate::frontend::diagnostics::{CompileResult, errors};

use super::Semantics;

impl Semantics {
    // ========================================================================
    // Types
    // ========================================================================

    pub fn on_basic_type(&self, id: BasicTypeId) -> Type {
        Type::basic(id)
    }

    pub fn on_pointer_type(&self, pointee: Type) -> Type {
        Type::pointer_to(pointee)
    }

    // ========================================================================
    // Primary expressions
    // ========================================================================

    pub fn on_bool_literal(&self, value: bool, location: Location) -> Expr {
        Expr::new(ExprKind::Bool(value), Type::Bool, location)
    }

    pub fn on_int_literal(&self, value: i64, location: Location) -> Expr {
        Expr::new(ExprKind::Int(value), Type::Int, location)
    }

    pub fn on_float_literal(&self, value: f64, location: Location) -> Expr {
        Expr::new(ExprKind::Float(value), Type::Float, location)
    }

    pub fn on_char_literal(&self, value: char, location: Location) -> Expr {
        Expr::new(ExprKind::Char(value), Type::Char, location)
    }

    /// Resolve an identifier.
    ///
    /// Variables and parameters denote storage, so the expression gets reference type; constants, values, and
    /// functions produce their declared type directly.
    ///
    /// ## Errors
    /// - Name error if `name` is not visible here.
    pub fn on_id_expression(&self, name: Symbol, location: Location) -> CompileResult<Expr> {
        let decl = self
            .lookup(&name)
            .ok_or_else(|| errors::unknown_symbol(name.as_str(), location))?;
        let declared = decl
            .ty()
            .cloned()
            .expect("INVARIANT: scopes only hold named, typed declarations");
        let ty = if decl.is_reference_category() {
            Type::reference_to(declared)
        } else {
            declared
        };
        let decl = Rc::downgrade(decl);
        Ok(Expr::new(ExprKind::Id { name, decl }, ty, location))
    }

    // ========================================================================
    // Operators
    // ========================================================================

    pub fn on_unary_expression(&self, op: UnaryOp, operand: Expr, location: Location) -> CompileResult<Expr> {
        let (operand, ty) = match op {
            UnaryOp::Pos | UnaryOp::Neg => {
                let operand = self.require_arithmetic(operand)?;
                let ty = operand.ty().clone();
                (operand, ty)
            }
            UnaryOp::Cmp => (self.require_integer(operand)?, Type::Int),
            UnaryOp::Not => (self.require_boolean(operand)?, Type::Bool),
            UnaryOp::Addr => {
                let operand = self.require_reference(operand)?;
                let ty = Type::pointer_to(operand.ty().object_type().clone());
                (operand, ty)
            }
            UnaryOp::Deref => {
                let operand = self.require_pointer(operand)?;
                let pointee = operand
                    .ty()
                    .pointee()
                    .cloned()
                    .expect("INVARIANT: require_pointer yields a pointer");
                (operand, Type::reference_to(pointee))
            }
        };
        Ok(Expr::new(
            ExprKind::Unary {
                op,
                operand: Box::new(operand),
            },
            ty,
            location,
        ))
    }

    /// Check a binary operation.
    ///
    /// ## Notes
    /// - Arithmetic, equality, and ordering operands must have exactly the same type after value reduction;
    ///   mixing `int` and `float` needs an explicit `as`.
    /// - Bitwise operands must be `int`; logical operands are truth values.
    pub fn on_binary_expression(&self, op: BinaryOp, lhs: Expr, rhs: Expr, location: Location) -> CompileResult<Expr> {
        let (lhs, rhs, ty) = if op.is_arithmetic() {
            let lhs = self.require_arithmetic(lhs)?;
            let rhs = self.require_arithmetic(rhs)?;
            let ty = Self::same_operand_type(&lhs, &rhs)?;
            (lhs, rhs, ty)
        } else if op.is_bitwise() {
            (self.require_integer(lhs)?, self.require_integer(rhs)?, Type::Int)
        } else if op.is_logical() {
            (self.require_boolean(lhs)?, self.require_boolean(rhs)?, Type::Bool)
        } else if op.is_equality() {
            let lhs = self.require_scalar(lhs)?;
            let rhs = self.require_scalar(rhs)?;
            Self::same_operand_type(&lhs, &rhs)?;
            (lhs, rhs, Type::Bool)
        } else {
            debug_assert!(op.is_ordering());
            let lhs = self.require_numeric(lhs)?;
            let rhs = self.require_numeric(rhs)?;
            Self::same_operand_type(&lhs, &rhs)?;
            (lhs, rhs, Type::Bool)
        };
        Ok(Expr::new(
            ExprKind::Binary {
                op,
                lhs: Box::new(lhs),
                rhs: Box::new(rhs),
            },
            ty,
            location,
        ))
    }

    fn same_operand_type(lhs: &Expr, rhs: &Expr) -> CompileResult<Type> {
        if lhs.ty().is_same_as(rhs.ty()) {
            Ok(lhs.ty().clone())
        } else {
            Err(errors::type_mismatch(&lhs.ty().to_string(), &rhs.ty().to_string(), rhs.location()))
        }
    }

    /// `target = value`; the result denotes the assigned storage.
    ///
    /// ## Errors
    /// - Type error if `target` is not a reference, or if the value's type is not exactly the target's object
    ///   type.
    pub fn on_assignment_expression(&self, target: Expr, value: Expr, location: Location) -> CompileResult<Expr> {
        let target = self.require_reference(target)?;
        let value = self.require_value(value)?;
        let object = target.ty().object_type();
        if !value.ty().is_same_as(object) {
            return Err(errors::type_mismatch(&object.to_string(), &value.ty().to_string(), value.location()));
        }
        let ty = target.ty().clone();
        Ok(Expr::new(
            ExprKind::Assign {
                target: Box::new(target),
                value: Box::new(value),
            },
            ty,
            location,
        ))
    }

    /// `condition ? then_branch : else_branch`
    ///
    /// The branches are unified with [`Semantics::common_type`] and converted to it.
    pub fn on_conditional_expression(
        &self,
        condition: Expr,
        then_branch: Expr,
        else_branch: Expr,
        location: Location,
    ) -> CompileResult<Expr> {
        let condition = self.require_boolean(condition)?;
        let ty = self
            .common_type(then_branch.ty(), else_branch.ty())
            .ok_or_else(|| {
                errors::no_common_type(
                    &then_branch.ty().to_string(),
                    &else_branch.ty().to_string(),
                    else_branch.location(),
                )
            })?;
        let then_branch = self.convert_to_type(then_branch, &ty)?;
        let else_branch = self.convert_to_type(else_branch, &ty)?;
        Ok(Expr::new(
            ExprKind::Conditional {
                condition: Box::new(condition),
                then_branch: Box::new(then_branch),
                else_branch: Box::new(else_branch),
            },
            ty,
            location,
        ))
    }

    /// `source as target`
    pub fn on_cast_expression(&self, source: Expr, target: Type, location: Location) -> CompileResult<Expr> {
        let source = self.convert_to_type(source, &target)?;
        Ok(Expr::new(
            ExprKind::Cast {
                source: Box::new(source),
            },
            target,
            location,
        ))
    }

    // ========================================================================
    // Postfix expressions
    // ========================================================================

    /// `callee(args...)`
    ///
    /// ## Errors
    /// - Type error if the callee is not a function, the argument count differs from the parameter count, or an
    ///   argument's type is not exactly its parameter's type.
    pub fn on_call_expression(&self, callee: Expr, args: Vec<Expr>, location: Location) -> CompileResult<Expr> {
        let callee = self.require_function(callee)?;
        let signature = callee
            .ty()
            .as_function()
            .cloned()
            .expect("INVARIANT: require_function yields a function");
        if args.len() != signature.params.len() {
            return Err(errors::argument_count(signature.params.len(), args.len(), location));
        }

        let args = args
            .into_iter()
            .zip(&signature.params)
            .map(|(arg, param)| {
                let arg = self.require_value(arg)?;
                if arg.ty().is_same_as(param) {
                    Ok(arg)
                } else {
                    Err(errors::type_mismatch(&param.to_string(), &arg.ty().to_string(), arg.location()))
                }
            })
            .collect::<CompileResult<Vec<_>>>()?;

        Ok(Expr::new(
            ExprKind::Call {
                callee: Box::new(callee),
                args,
            },
            signature.ret,
            location,
        ))
    }

    /// `base[index]`; the result denotes the pointed-to element.
    pub fn on_index_expression(&self, base: Expr, args: Vec<Expr>, location: Location) -> CompileResult<Expr> {
        let base = self.require_pointer(base)?;
        if args.len() != 1 {
            return Err(CompileError::type_error(
                format!("expected exactly one index, found {}", args.len()),
                location,
            ));
        }
        let args = args
            .into_iter()
            .map(|arg| self.require_integer(arg))
            .collect::<CompileResult<Vec<_>>>()?;
        let pointee = base
            .ty()
            .pointee()
            .cloned()
            .expect("INVARIANT: require_pointer yields a pointer");
        Ok(Expr::new(
            ExprKind::Index {
                base: Box::new(base),
                args,
            },
            Type::reference_to(pointee),
            location,
        ))
    }
}
