#[cfg(test)]
/// Parser unit tests.
///
/// These cover grammar shape (precedence, associativity, statement forms, lookahead decisions) and the
/// syntax errors the parser itself raises. Type rules are covered by the analyzer's tests.
mod tests {
    use super::*;
    use crate::frontend::ast::{ExprKind, dump};
    use crate::frontend::diagnostics::ErrorKind;

    fn parse_str(source: &str) -> CompileResult<Declaration> {
        let mut interner = Interner::new();
        compile(&SourceFile::new("test.mc", source), &mut interner)
    }

    /// Parse `body` as the body of `def t(a : int, b : int) -> int` and return its statements.
    fn body_of(body: &str) -> CompileResult<Vec<Stmt>> {
        let program = parse_str(&format!("def t(a : int, b : int) -> int {{ {body} }}"))?;
        match program.declarations()[0].body() {
            Some(Stmt::Block(stmts)) => Ok(stmts.clone()),
            other => panic!("expected a block body, got {other:?}"),
        }
    }

    fn expr_of(stmt: &Stmt) -> &Expr {
        match stmt {
            Stmt::Expr(expr) | Stmt::Return(Some(expr)) => expr,
            other => panic!("expected an expression statement, got {other:?}"),
        }
    }

    /// Strip value conversions to reach the node underneath.
    fn unwrap_value(expr: &Expr) -> &Expr {
        match expr.kind() {
            ExprKind::Conversion { source, .. } => unwrap_value(source),
            _ => expr,
        }
    }

    #[test]
    fn test_empty_program() {
        let program = parse_str("").unwrap();
        assert!(program.declarations().is_empty());
    }

    #[test]
    fn test_multiplicative_binds_tighter_than_additive() {
        let stmts = body_of("return a + b * 2;").unwrap();
        match expr_of(&stmts[0]).kind() {
            ExprKind::Binary { op: BinaryOp::Add, rhs, .. } => {
                assert!(matches!(rhs.kind(), ExprKind::Binary { op: BinaryOp::Mul, .. }));
            }
            other => panic!("expected add at the root, got {other:?}"),
        }
    }

    #[test]
    fn test_binary_levels_are_left_associative() {
        let stmts = body_of("return a - b - 1;").unwrap();
        match expr_of(&stmts[0]).kind() {
            ExprKind::Binary { op: BinaryOp::Sub, lhs, rhs } => {
                assert!(matches!(lhs.kind(), ExprKind::Binary { op: BinaryOp::Sub, .. }));
                assert!(matches!(rhs.kind(), ExprKind::Int(1)));
            }
            other => panic!("expected sub at the root, got {other:?}"),
        }
    }

    #[test]
    fn test_assignment_is_right_associative() {
        let stmts = body_of("a = b = 3;").unwrap();
        match expr_of(&stmts[0]).kind() {
            ExprKind::Assign { value, .. } => {
                assert!(matches!(unwrap_value(value).kind(), ExprKind::Assign { .. }));
            }
            other => panic!("expected an assignment, got {other:?}"),
        }
    }

    #[test]
    fn test_chained_conditional_nests_to_the_right() {
        let stmts = body_of("return a < b ? 1 : a > b ? 2 : 3;").unwrap();
        match expr_of(&stmts[0]).kind() {
            ExprKind::Conditional { else_branch, .. } => {
                assert!(matches!(else_branch.kind(), ExprKind::Conditional { .. }));
            }
            other => panic!("expected a conditional, got {other:?}"),
        }
    }

    #[test]
    fn test_logical_words_and_symbols_are_interchangeable() {
        let words = parse_str("def t(a : int, b : int) -> bool { return a < b and not (b < a) or a == b; }");
        let symbols = parse_str("def t(a : int, b : int) -> bool { return a < b && !(b < a) || a == b; }");
        assert_eq!(dump(&words.unwrap()), dump(&symbols.unwrap()));
    }

    #[test]
    fn test_shift_binds_looser_than_additive() {
        let stmts = body_of("return a << b + 1;").unwrap();
        assert!(matches!(
            expr_of(&stmts[0]).kind(),
            ExprKind::Binary { op: BinaryOp::Shl, .. }
        ));
    }

    #[test]
    fn test_cast_chain_and_unary_operand() {
        let stmts = body_of("return -a as float as int;").unwrap();
        let outer = expr_of(&stmts[0]);
        assert!(matches!(outer.kind(), ExprKind::Cast { .. }));
        assert_eq!(outer.ty(), &Type::Int);
    }

    #[test]
    fn test_if_without_else_builds_when() {
        let stmts = body_of("if (a) a = 1; if (a < b) { a = 2; } else a = 3; return a;").unwrap();
        assert!(matches!(stmts[0], Stmt::When { .. }));
        assert!(matches!(stmts[1], Stmt::If { .. }));
    }

    #[test]
    fn test_while_with_break_and_continue() {
        let stmts = body_of("while (a < b) { if (a == 0) break; a = a + 1; continue; } return a;").unwrap();
        match &stmts[0] {
            Stmt::While { body, .. } => assert!(matches!(**body, Stmt::Block(ref inner) if inner.len() == 3)),
            other => panic!("expected a while loop, got {other:?}"),
        }
    }

    #[test]
    fn test_break_outside_loop_is_rejected() {
        let err = body_of("break; return a;").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert!(err.message.contains("'break' outside of a loop"), "{}", err.message);
    }

    #[test]
    fn test_def_lookahead_selects_value_or_function() {
        let program = parse_str("def k : int = 4; def f() -> int { return k; }").unwrap();
        let kinds: Vec<_> = program.declarations().iter().map(|d| d.kind()).collect();
        assert_eq!(kinds, [DeclKind::Value, DeclKind::Function]);
    }

    #[test]
    fn test_def_followed_by_other_token_is_a_syntax_error() {
        let err = parse_str("def k = 4;").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert_eq!(err.message, "expected ':' or '(' after the defined name, found <assignment-operator>");
    }

    #[test]
    fn test_function_declaration_without_body() {
        let program = parse_str("def g(x : int) -> int;").unwrap();
        let g = &program.declarations()[0];
        assert_eq!(g.kind(), DeclKind::Function);
        assert!(g.body().is_none());
        assert_eq!(g.parameters().len(), 1);
    }

    #[test]
    fn test_nested_function_is_rejected() {
        let err = body_of("def inner() -> int { return 1; } return a;").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert!(err.message.contains("top level"));
    }

    #[test]
    fn test_missing_primary_reports_found_token() {
        let err = body_of("return ;;").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Type);

        let err = body_of("return * ;").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert_eq!(err.message, "expected a primary expression, found <semicolon>");
    }

    #[test]
    fn test_string_literal_is_not_an_expression() {
        let err = body_of("return \"text\";").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert!(err.message.starts_with("expected a primary expression, found <string:text>"));
    }

    #[test]
    fn test_statement_at_top_level_is_rejected() {
        let err = parse_str("x = 1;").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert_eq!(err.message, "expected a declaration, found <identifier:x>");
        assert_eq!(err.location, Location::new(1, 1));
    }

    #[test]
    fn test_unclosed_block_reports_end_of_input() {
        let err = parse_str("def f() -> int { return 1;").unwrap_err();
        assert_eq!(err.message, "expected '}', found <end-of-input>");
    }

    #[test]
    fn test_pointer_and_parenthesized_types() {
        let program = parse_str("def f(p : *(*int)) -> int { return *p[0]; }").unwrap();
        let f = &program.declarations()[0];
        assert_eq!(f.parameters()[0].ty(), Some(&Type::pointer_to(Type::pointer_to(Type::Int))));
    }

    #[test]
    fn test_lexical_error_surfaces_through_parser() {
        let err = parse_str("var x : int = 1 $ 2;").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Lexical);
    }

    #[test]
    fn test_lookahead_keeps_buffered_tokens() {
        let mut interner = Interner::new();
        let mut parser = Parser::new(Lexer::new("def f ( x", &mut interner)).unwrap();
        assert!(parser.lookahead(2).unwrap().kind.is_punctuation(PunctuationId::LParen));
        assert!(parser.peek().kind.is_keyword(KeywordId::Def));
        parser.accept().unwrap();
        assert!(matches!(parser.peek().kind, TokenKind::Identifier(_)));
        assert!(parser.lookahead(10).unwrap().kind.is_eof());
        assert_eq!(parser.tokens.len(), 11);
    }

    #[test]
    fn test_fragment_entry_points() {
        let mut interner = Interner::new();
        let mut parser = Parser::new(Lexer::new("*int var n : int = 2; n * 3", &mut interner)).unwrap();
        parser.enter_global_scope();
        assert_eq!(parser.parse_type().unwrap(), Type::pointer_to(Type::Int));
        assert_eq!(parser.parse_declaration().unwrap().kind(), DeclKind::Variable);
        assert_eq!(parser.parse_expression().unwrap().ty(), &Type::Int);
    }

    #[test]
    fn test_program_dump_snapshot() {
        let program = parse_str("def f(a : int) -> int { var s : int = -a * 2 + 1; if (s) return s; return 0; }")
            .unwrap();
        insta::assert_snapshot!(dump(&program).trim_end(), @r"
        program
          function f : (int) -> int
            parameter a : int
            block
              variable s : int
                binary add : int
                  binary mul : int
                    unary neg : int
                      conversion value : int
                        id a : &int
                    int 2 : int
                  int 1 : int
              when
                conversion bool : bool
                  conversion value : int
                    id s : &int
                return
                  conversion value : int
                    id s : &int
              return
                int 0 : int
        ");
    }

    #[test]
    fn test_dump_marks_whole_float_literals() {
        let program = parse_str("def k : float = 2.0;").unwrap();
        assert_eq!(dump(&program), "program\n  value k : float\n    float 2.0 : float\n");
    }

    // ========================================================================
    // Nesting limit
    // ========================================================================

    /// Compile `source` on a thread with the main thread's usual stack, so the limit, not the harness, decides.
    fn parse_deep(source: String) -> CompileResult<()> {
        std::thread::Builder::new()
            .stack_size(8 * 1024 * 1024)
            .spawn(move || parse_str(&source).map(drop))
            .unwrap()
            .join()
            .unwrap()
    }

    fn assert_too_deep(result: CompileResult<()>) {
        let err = result.unwrap_err();
        assert_eq!(err.kind, ErrorKind::Syntax);
        assert!(err.message.starts_with("nesting too deep"), "{}", err.message);
    }

    #[test]
    fn test_moderate_nesting_is_accepted() {
        let depth = 40;
        let source = format!(
            "def f() -> int {{ {}return {}1{}; {} }}",
            "{ ".repeat(depth),
            "(".repeat(depth),
            ")".repeat(depth),
            "}".repeat(depth)
        );
        assert!(parse_deep(source).is_ok());
    }

    #[test]
    fn test_deep_parentheses_are_a_syntax_error() {
        let depth = 20_000;
        let source = format!("def f() -> int {{ return {}1{}; }}", "(".repeat(depth), ")".repeat(depth));
        assert_too_deep(parse_deep(source));
    }

    #[test]
    fn test_deep_blocks_and_unary_chains_are_syntax_errors() {
        assert_too_deep(parse_deep(format!("def f() -> int {{ {} }}", "{".repeat(20_000))));
        assert_too_deep(parse_deep(format!("def f() -> int {{ return {}1; }}", "- ".repeat(20_000))));
        assert_too_deep(parse_deep(format!("var p : {}int;", "*".repeat(20_000))));
    }

    #[test]
    fn test_long_operator_and_cast_chains_count_as_nesting() {
        let sum = vec!["1"; 20_000].join(" + ");
        assert_too_deep(parse_deep(format!("def f() -> int {{ return {sum}; }}")));
        let casts = " as int".repeat(20_000);
        assert_too_deep(parse_deep(format!("def f() -> int {{ return 1{casts}; }}")));

        let short = vec!["1"; 50].join(" + ");
        assert!(parse_deep(format!("def f() -> int {{ return {short}; }}")).is_ok());
    }
}

