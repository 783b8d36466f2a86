//! Semantic analyzer unit tests.

use std::rc::Rc;

use super::*;
use crate::frontend::ast::{BinaryOp, Conversion, DeclKind, Expr, ExprKind, Stmt, Type, UnaryOp};
use crate::frontend::diagnostics::{CompileError, ErrorKind};
use crate::frontend::interner::Interner;
use crate::frontend::location::{Location, SourceFile};
use crate::frontend::parser::compile;

fn check_str(source: &str) -> Result<Declaration, CompileError> {
    let mut interner = Interner::new();
    compile(&SourceFile::new("test.mc", source), &mut interner)
}

/// Check `body` inside `def t(x : int, y : float, p : *int) -> int`.
fn check_body(body: &str) -> Result<Declaration, CompileError> {
    check_str(&format!("def t(x : int, y : float, p : *int) -> int {{ {body} }}"))
}

fn loc() -> Location {
    Location::START
}

/// An analyzer with an open global scope.
fn analyzer() -> Semantics {
    let mut sema = Semantics::new();
    sema.enter_global_scope();
    sema
}

/// A reference-typed identifier for a fresh variable of type `ty`.
fn variable_ref(sema: &mut Semantics, interner: &mut Interner, name: &str, ty: Type) -> Expr {
    let symbol = interner.intern(name);
    sema.on_object_declaration(DeclKind::Variable, symbol.clone(), ty, None, loc())
        .unwrap();
    sema.on_id_expression(symbol, loc()).unwrap()
}

// ========================================
// Scopes and declarations
// ========================================

#[test]
fn test_redeclaration_in_same_scope_is_a_name_error() {
    let err = check_str("var a : int; var a : int;").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Name);
    assert_eq!(err.message, "redeclaration of 'a'");
}

#[test]
fn test_shadowing_in_nested_block() {
    let program = check_body("var z : float = y; { var z : int = x; return z; }").unwrap();
    let Some(Stmt::Block(stmts)) = program.declarations()[0].body() else {
        panic!("function body should be a block");
    };
    let Stmt::Block(inner) = &stmts[1] else {
        panic!("second statement should be a block");
    };
    let Stmt::Return(Some(value)) = &inner[1] else {
        panic!("expected a return");
    };
    let ExprKind::Conversion { source, .. } = value.kind() else {
        panic!("expected a value conversion");
    };
    let decl = source.declaration().unwrap();
    assert!(Rc::ptr_eq(&decl, &match &inner[0] {
        Stmt::Decl(d) => Rc::clone(d),
        other => panic!("expected a declaration, got {other:?}"),
    }));
    assert_eq!(decl.ty(), Some(&Type::Int));
}

#[test]
fn test_parameters_share_the_outermost_block_scope() {
    let err = check_body("var x : int = 1; return x;").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Name);
    assert_eq!(err.message, "redeclaration of 'x'");

    assert!(check_body("{ var x : int = 1; return x; } return x;").is_ok());
}

#[test]
fn test_duplicate_parameter_names_are_rejected() {
    let err = check_str("def f(a : int, a : int) -> int { return a; }").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Name);
}

#[test]
fn test_use_before_declaration_is_unresolved() {
    let err = check_str("def f() -> int { return g(); } def g() -> int { return 1; }").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Name);
    assert_eq!(err.message, "no matching declaration for 'g'");
    assert_eq!(err.location, Location::new(1, 25));
}

#[test]
fn test_block_locals_are_gone_after_the_block() {
    let err = check_body("{ var inner : int; } return inner;").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Name);
}

#[test]
fn test_recursion_sees_the_function() {
    assert!(check_str("def fact(n : int) -> int { if (n <= 1) return 1; else return n * fact(n - 1); }").is_ok());
}

#[test]
fn test_declared_function_cannot_be_redefined() {
    let err = check_str("def f() -> int; def f() -> int { return 0; }").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Name);
}

#[test]
fn test_initializer_sees_the_outer_name() {
    let program = check_str("var v : int = 1; def f() -> int { var v : int = v + 1; return v; }");
    assert!(program.is_ok());
}

#[test]
fn test_constant_and_value_need_initializers() {
    let err = check_str("let c : int;").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Syntax);
    assert_eq!(err.message, "constant 'c' requires an initializer");

    let err = check_str("def k : int;").unwrap_err();
    assert_eq!(err.message, "value 'k' requires an initializer");

    assert!(check_str("var v : int;").is_ok());
}

#[test]
fn test_initializer_must_match_exactly() {
    let err = check_str("var f : float = 1;").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Type);
    assert!(err.message.contains("expected 'float', found 'int'"), "{}", err.message);
    assert!(check_str("var f : float = 1 as float;").is_ok());
}

// ========================================
// Identifier and assignment typing
// ========================================

#[test]
fn test_variable_identifier_has_reference_type() {
    let mut interner = Interner::new();
    let mut sema = analyzer();
    let x = variable_ref(&mut sema, &mut interner, "x", Type::Int);
    assert_eq!(x.ty(), &Type::reference_to(Type::Int));
    assert_eq!(x.declaration().and_then(|d| d.name().cloned()), Some(interner.intern("x")));
}

#[test]
fn test_constant_identifier_has_value_type() {
    let mut interner = Interner::new();
    let mut sema = analyzer();
    let c = interner.intern("c");
    let init = sema.on_int_literal(1, loc());
    sema.on_object_declaration(DeclKind::Constant, c.clone(), Type::Int, Some(init), loc())
        .unwrap();
    assert_eq!(sema.on_id_expression(c, loc()).unwrap().ty(), &Type::Int);
}

#[test]
fn test_assignment_to_variable() {
    let program = check_body("var v : int = 0; v = v + 1; return v;").unwrap();
    let Some(Stmt::Block(stmts)) = program.declarations()[0].body() else {
        panic!("function body should be a block");
    };
    let Stmt::Expr(assign) = &stmts[1] else {
        panic!("expected an expression statement");
    };
    let ExprKind::Assign { value, .. } = assign.kind() else {
        panic!("expected an assignment");
    };
    assert_eq!(value.ty(), &Type::Int);
    assert_eq!(assign.ty(), &Type::reference_to(Type::Int));
}

#[test]
fn test_assignment_to_constant_is_rejected() {
    let err = check_body("let c : int = 0; c = 1; return c;").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Type);
    assert!(err.message.starts_with("expected an assignable reference"), "{}", err.message);
}

#[test]
fn test_assignment_needs_exact_type() {
    let err = check_body("y = x; return x;").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Type);
    assert!(check_body("y = x as float; return x;").is_ok());
}

// ========================================
// Operators
// ========================================

#[test]
fn test_mixed_arithmetic_needs_a_cast() {
    let err = check_body("return x + y;").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Type);
    assert!(err.message.contains("type mismatch"));
    assert!(check_body("return x + y as int;").is_ok());
}

#[test]
fn test_arithmetic_rejects_bool() {
    let err = check_body("return true + 1;").unwrap_err();
    assert_eq!(err.message, "expected an arithmetic operand, found 'bool'");
}

#[test]
fn test_bitwise_requires_int() {
    assert!(check_body("return x & 3 | x ^ ~x;").is_ok());
    let err = check_body("return x << y;").unwrap_err();
    assert_eq!(err.message, "expected an integer operand, found 'float'");
}

#[test]
fn test_comparisons_yield_bool() {
    assert!(check_body("var b : bool = x < 3; var e : bool = p == p; return x;").is_ok());
    let err = check_body("var b : bool = p < p; return x;").unwrap_err();
    assert_eq!(err.message, "expected a numeric operand, found '*int'");
}

#[test]
fn test_logical_operands_are_converted_to_bool() {
    let mut interner = Interner::new();
    let mut sema = analyzer();
    let x = variable_ref(&mut sema, &mut interner, "x", Type::Int);
    let t = sema.on_bool_literal(true, loc());
    let and = sema.on_binary_expression(BinaryOp::LogicalAnd, x, t, loc()).unwrap();
    assert_eq!(and.ty(), &Type::Bool);
    let ExprKind::Binary { lhs, .. } = and.kind() else {
        panic!("expected a binary expression");
    };
    assert_eq!(lhs.conversion(), Some(Conversion::Bool));
}

#[test]
fn test_unary_operators() {
    let mut interner = Interner::new();
    let mut sema = analyzer();
    let x = variable_ref(&mut sema, &mut interner, "x", Type::Int);

    let addr = sema.on_unary_expression(UnaryOp::Addr, x.clone(), loc()).unwrap();
    assert_eq!(addr.ty(), &Type::pointer_to(Type::Int));

    let deref = sema.on_unary_expression(UnaryOp::Deref, addr, loc()).unwrap();
    assert_eq!(deref.ty(), &Type::reference_to(Type::Int));

    let not = sema.on_unary_expression(UnaryOp::Not, x.clone(), loc()).unwrap();
    assert_eq!(not.ty(), &Type::Bool);

    let literal = sema.on_int_literal(1, loc());
    let err = sema.on_unary_expression(UnaryOp::Addr, literal, loc()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Type);

    let err = sema.on_unary_expression(UnaryOp::Deref, x, loc()).unwrap_err();
    assert_eq!(err.message, "expected a pointer, found 'int'");
}

#[test]
fn test_pointer_index_and_store() {
    assert!(check_body("p[1] = x; *p = p[0] + 1; return *p;").is_ok());
    let err = check_body("return p[y];").unwrap_err();
    assert_eq!(err.message, "expected an integer operand, found 'float'");
    let err = check_body("return x[0];").unwrap_err();
    assert_eq!(err.message, "expected a pointer, found 'int'");
    let err = check_body("return p[0, 1];").unwrap_err();
    assert_eq!(err.message, "expected exactly one index, found 2");
}

// ========================================
// Conditional expressions
// ========================================

#[test]
fn test_conditional_of_equal_types() {
    let program = check_body("return true ? 1 : 2;").unwrap();
    let Some(Stmt::Block(stmts)) = program.declarations()[0].body() else {
        panic!("function body should be a block");
    };
    let Stmt::Return(Some(value)) = &stmts[0] else {
        panic!("expected a return");
    };
    assert_eq!(value.ty(), &Type::Int);
}

#[test]
fn test_conditional_unifies_reference_with_value() {
    let mut interner = Interner::new();
    let mut sema = analyzer();
    let x = variable_ref(&mut sema, &mut interner, "x", Type::Int);
    let cond = sema.on_bool_literal(true, loc());
    let two = sema.on_int_literal(2, loc());
    let expr = sema.on_conditional_expression(cond, x, two, loc()).unwrap();
    assert_eq!(expr.ty(), &Type::Int);
    let ExprKind::Conditional { then_branch, .. } = expr.kind() else {
        panic!("expected a conditional");
    };
    assert_eq!(then_branch.conversion(), Some(Conversion::Value));
}

#[test]
fn test_conditional_of_two_references_stays_assignable() {
    assert!(check_body("var a : int; var b : int; (x < 0 ? a : b) = 1; return a;").is_ok());
}

#[test]
fn test_conditional_without_common_type() {
    let err = check_str("def f() -> int; def g() -> int { return true ? 1 : f; }").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Type);
    assert_eq!(err.message, "no common type for 'int' and '() -> int'");
}

// ========================================
// Calls and returns
// ========================================

#[test]
fn test_call_type_is_return_type() {
    let program = check_str("def f(a : int, b : int) -> int { return a + b; } def g() -> int { return f(1, 2); }");
    let program = program.unwrap();
    let g = &program.declarations()[1];
    let Some(Stmt::Block(stmts)) = g.body() else {
        panic!("function body should be a block");
    };
    let Stmt::Return(Some(call)) = &stmts[0] else {
        panic!("expected a return");
    };
    assert!(matches!(call.kind(), ExprKind::Call { .. }));
    assert_eq!(call.ty(), &Type::Int);
}

#[test]
fn test_call_argument_count() {
    let err = check_str("def f(a : int, b : int) -> int { return a + b; } def g() -> int { return f(1); }")
        .unwrap_err();
    assert_eq!(err.kind, ErrorKind::Type);
    assert_eq!(err.message, "too few arguments: expected 2, found 1");

    let err = check_str("def f(a : int) -> int { return a; } def g() -> int { return f(1, 2); }").unwrap_err();
    assert_eq!(err.message, "too many arguments: expected 1, found 2");
}

#[test]
fn test_call_arguments_are_not_coerced() {
    let err = check_str("def f(a : float) -> float { return a; } def g() -> float { return f(1); }").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Type);
    assert!(err.message.contains("expected 'float', found 'int'"));
}

#[test]
fn test_calling_a_non_function() {
    let err = check_body("return x(1);").unwrap_err();
    assert_eq!(err.message, "expected a function, found 'int'");
}

#[test]
fn test_return_type_must_match() {
    let err = check_body("return y;").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Type);
    let err = check_body("return;").unwrap_err();
    assert_eq!(err.message, "missing return value: expected 'int'");
}

// ========================================
// Conversions
// ========================================

#[test]
fn test_listed_conversions_produce_their_tags() {
    let mut interner = Interner::new();
    let mut sema = analyzer();
    let pointer = variable_ref(&mut sema, &mut interner, "p", Type::pointer_to(Type::Char));
    let function = {
        let f = interner.intern("f");
        sema.on_function_declaration(f.clone(), Vec::new(), Type::Int, loc())
            .unwrap();
        sema.on_id_expression(f, loc()).unwrap()
    };

    let cases = [
        (sema.on_bool_literal(true, loc()), Type::Bool, None),
        (sema.on_char_literal('a', loc()), Type::Bool, Some(Conversion::Bool)),
        (sema.on_int_literal(1, loc()), Type::Bool, Some(Conversion::Bool)),
        (sema.on_float_literal(1.0, loc()), Type::Bool, Some(Conversion::Bool)),
        (pointer, Type::Bool, Some(Conversion::Bool)),
        (function, Type::Bool, Some(Conversion::Bool)),
        (sema.on_char_literal('a', loc()), Type::Char, None),
        (sema.on_int_literal(65, loc()), Type::Char, Some(Conversion::Char)),
        (sema.on_int_literal(1, loc()), Type::Int, None),
        (sema.on_float_literal(1.5, loc()), Type::Int, Some(Conversion::Trunc)),
        (sema.on_bool_literal(true, loc()), Type::Int, Some(Conversion::Int)),
        (sema.on_char_literal('a', loc()), Type::Int, Some(Conversion::Int)),
        (sema.on_float_literal(1.5, loc()), Type::Float, None),
        (sema.on_int_literal(1, loc()), Type::Float, Some(Conversion::Ext)),
    ];

    for (expr, target, expected) in cases {
        let source_ty = expr.ty().clone();
        let converted = sema.convert_to_type(expr, &target).unwrap();
        assert_eq!(converted.ty(), &target, "{source_ty} -> {target}");
        assert_eq!(converted.conversion(), expected, "{source_ty} -> {target}");
    }
}

#[test]
fn test_unlisted_conversions_fail() {
    let mut interner = Interner::new();
    let mut sema = analyzer();
    let pointer = Type::pointer_to(Type::Int);
    let cases = [
        (sema.on_bool_literal(true, loc()), Type::Char),
        (sema.on_float_literal(1.0, loc()), Type::Char),
        (sema.on_bool_literal(true, loc()), Type::Float),
        (sema.on_char_literal('a', loc()), Type::Float),
        (sema.on_int_literal(0, loc()), pointer.clone()),
        (variable_ref(&mut sema, &mut interner, "q", Type::pointer_to(Type::Char)), pointer.clone()),
        (variable_ref(&mut sema, &mut interner, "r", pointer.clone()), Type::Int),
        (sema.on_int_literal(0, loc()), Type::function(vec![], Type::Int)),
    ];

    for (expr, target) in cases {
        let err = sema.convert_to_type(expr, &target).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Type);
        assert!(err.message.starts_with("cannot convert"), "{}", err.message);
    }
}

#[test]
fn test_conversion_value_reduces_references_first() {
    let mut interner = Interner::new();
    let mut sema = analyzer();
    let x = variable_ref(&mut sema, &mut interner, "x", Type::Int);
    let converted = sema.convert_to_type(x, &Type::Float).unwrap();
    assert_eq!(converted.conversion(), Some(Conversion::Ext));
    let ExprKind::Conversion { source, .. } = converted.kind() else {
        panic!("expected a conversion");
    };
    assert_eq!(source.conversion(), Some(Conversion::Value));
    assert_eq!(source.ty(), &Type::Int);
}

#[test]
fn test_conversion_to_same_reference_is_identity() {
    let mut interner = Interner::new();
    let mut sema = analyzer();
    let x = variable_ref(&mut sema, &mut interner, "x", Type::Int);
    let converted = sema.convert_to_type(x, &Type::reference_to(Type::Int)).unwrap();
    assert!(matches!(converted.kind(), ExprKind::Id { .. }));
}

#[test]
fn test_cast_of_function_to_int_fails() {
    let err = check_str("def f() -> int; def g() -> int { return f as int; }").unwrap_err();
    assert_eq!(err.message, "cannot convert '() -> int' to 'int'");
}

#[test]
fn test_common_type_rules() {
    let sema = Semantics::new();
    let r = Type::reference_to(Type::Int);
    assert_eq!(sema.common_type(&Type::Int, &Type::Int), Some(Type::Int));
    assert_eq!(sema.common_type(&r, &Type::Int), Some(Type::Int));
    assert_eq!(sema.common_type(&Type::Int, &r), Some(Type::Int));
    assert_eq!(sema.common_type(&r, &r), Some(r.clone()));
    assert_eq!(sema.common_type(&Type::Int, &Type::Float), None);
    assert_eq!(sema.common_type(&r, &Type::Float), None);
}

// ========================================
// Function context
// ========================================

#[test]
fn test_return_outside_function() {
    let sema = analyzer();
    let value = sema.on_int_literal(0, loc());
    let err = sema.on_return_statement(Some(value), loc()).unwrap_err();
    assert_eq!(err.kind, ErrorKind::Syntax);
}

#[test]
#[should_panic(expected = "INVARIANT: function definitions do not nest")]
fn test_nested_function_activation_is_a_bug() {
    let mut interner = Interner::new();
    let mut sema = analyzer();
    let f = sema
        .on_function_declaration(interner.intern("f"), Vec::new(), Type::Int, loc())
        .unwrap();
    let g = sema
        .on_function_declaration(interner.intern("g"), Vec::new(), Type::Int, loc())
        .unwrap();
    sema.begin_function(&f);
    sema.begin_function(&g);
}

#[test]
fn test_block_under_global_declares_current_parameters() {
    let mut interner = Interner::new();
    let mut sema = analyzer();
    let a = interner.intern("a");

    sema.enter_parameter_scope();
    let param = sema.on_parameter_declaration(a.clone(), Type::Int, loc()).unwrap();
    sema.leave_scope();
    assert!(sema.lookup(&a).is_none());

    let f = sema
        .on_function_declaration(interner.intern("f"), vec![param], Type::Int, loc())
        .unwrap();
    sema.begin_function(&f);
    sema.enter_block_scope().unwrap();
    assert_eq!(sema.lookup(&a).map(|d| d.kind()), Some(DeclKind::Parameter));

    sema.enter_block_scope().unwrap();
    assert_eq!(sema.scope_depth(), 3);
    sema.leave_scope();
    sema.leave_scope();
    sema.end_function();
    assert!(sema.lookup(&a).is_none());
    assert!(sema.current_function().is_none());
}
